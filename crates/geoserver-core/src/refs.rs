//! Cross-resource reference shapes.

use serde::{Deserialize, Serialize};

/// A name/href pair pointing at another catalog resource.
///
/// This is the shape GeoServer uses everywhere a listing or a parent link
/// appears: workspace entries, store entries, published-resource entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRef {
    /// Resource name.
    pub name: String,
    /// REST link to the resource.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub href: String,
}

impl ResourceRef {
    /// Reference a resource by name alone.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            href: String::new(),
        }
    }
}

/// A reference carrying GeoServer's `@class` discriminator.
///
/// Used where the target may be one of several kinds, e.g. a layer's
/// `resource` (`featureType` vs `coverage`) or a layer group's publishables
/// (`layer` vs `layerGroup`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypedRef {
    /// Kind discriminator, e.g. `featureType` or `layer`.
    #[serde(rename = "@class", default, skip_serializing_if = "String::is_empty")]
    pub class: String,
    /// Resource name.
    pub name: String,
    /// REST link to the resource.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub href: String,
}

impl TypedRef {
    /// Build a typed reference from a class and a name.
    pub fn new(class: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            name: name.into(),
            href: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn resource_ref_roundtrip() {
        let r: ResourceRef = serde_json::from_value(json!({
            "name": "topp",
            "href": "http://localhost:8080/geoserver/rest/workspaces/topp.json"
        }))
        .unwrap();
        assert_eq!(r.name, "topp");
        let raw = serde_json::to_value(&r).unwrap();
        assert_eq!(raw["name"], "topp");
    }

    #[test]
    fn resource_ref_href_optional() {
        let r: ResourceRef = serde_json::from_value(json!({"name": "sf"})).unwrap();
        assert_eq!(r.href, "");
        // Blank href stays off the wire.
        assert_eq!(serde_json::to_value(&r).unwrap(), json!({"name": "sf"}));
    }

    #[test]
    fn typed_ref_class_field() {
        let r: TypedRef = serde_json::from_value(json!({
            "@class": "featureType",
            "name": "topp:states",
            "href": "http://localhost:8080/geoserver/rest/layers/states.json"
        }))
        .unwrap();
        assert_eq!(r.class, "featureType");
        let raw = serde_json::to_value(&r).unwrap();
        assert_eq!(raw["@class"], "featureType");
    }
}
