//! Layer groups.

use serde::{Deserialize, Serialize};

use crate::bounds::BoundingBox;
use crate::refs::{ResourceRef, TypedRef};
use crate::style::StyleList;

/// The ordered publishables of a layer group.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Publishables {
    /// Layers and nested groups, bottom-up draw order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub published: Vec<TypedRef>,
}

/// A layer group: an ordered collection of layers published as one resource.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayerGroup {
    /// Group name.
    pub name: String,
    /// Group mode, e.g. `SINGLE` or `NAMED`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub mode: String,
    /// Human-readable title.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    /// Owning workspace for workspace-local groups.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace: Option<ResourceRef>,
    /// Member layers/groups.
    #[serde(skip_serializing_if = "Publishables::is_empty")]
    pub publishables: Publishables,
    /// Per-member styles, positionally matching `publishables`. Lenient
    /// envelope field.
    #[serde(skip_serializing_if = "StyleList::is_empty")]
    pub styles: StyleList,
    /// Cached bounds of the whole group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounds: Option<BoundingBox>,
}

impl Publishables {
    /// True when the group has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.published.is_empty()
    }
}

/// Request/response wrapper for a single layer group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayerGroupBody {
    /// The wrapped group.
    #[serde(rename = "layerGroup")]
    pub layer_group: LayerGroup,
}

/// Response wrapper for a layer group listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LayerGroupsResponse {
    /// The wrapped listing.
    #[serde(rename = "layerGroups")]
    pub layer_groups: LayerGroupRefs,
}

/// Inner listing of layer group references.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LayerGroupRefs {
    /// Name/href pairs for each group.
    #[serde(default, rename = "layerGroup")]
    pub layer_group: Vec<ResourceRef>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decode_group_with_style_envelope() {
        let body: LayerGroupBody = serde_json::from_value(json!({
            "layerGroup": {
                "name": "spearfish",
                "mode": "SINGLE",
                "title": "Spearfish base map",
                "publishables": {
                    "published": [
                        {"@type": "layer", "@class": "layer", "name": "sf:streams"},
                        {"@class": "layer", "name": "sf:roads"}
                    ]
                },
                "styles": {
                    "style": [
                        {"name": "blue_lines", "href": "http://localhost:8080/geoserver/rest/styles/blue_lines.json"},
                        "simple_roads"
                    ]
                },
                "bounds": {
                    "minx": 589425.93, "maxx": 609518.67,
                    "miny": 4913959.22, "maxy": 4928082.94,
                    "crs": {"@class": "projected", "$": "EPSG:26713"}
                }
            }
        }))
        .unwrap();
        let group = body.layer_group;
        assert_eq!(group.publishables.published.len(), 2);
        assert_eq!(group.styles.len(), 2);
        assert_eq!(group.styles.0[1].name, "simple_roads");
        assert_eq!(group.styles.0[1].href, "");
    }

    #[test]
    fn single_member_group_with_collapsed_styles() {
        // Single-entry groups may come back with the list collapsed to one
        // object, or even a bare string.
        let body: LayerGroupBody = serde_json::from_value(json!({
            "layerGroup": {
                "name": "solo",
                "publishables": {"published": [{"@class": "layer", "name": "sf:roads"}]},
                "styles": "simple_roads"
            }
        }))
        .unwrap();
        assert_eq!(body.layer_group.styles.len(), 1);
        assert_eq!(body.layer_group.styles.0[0].name, "simple_roads");
    }

    #[test]
    fn garbled_styles_do_not_sink_the_group() {
        let body: LayerGroupBody = serde_json::from_value(json!({
            "layerGroup": {"name": "odd", "styles": 99}
        }))
        .unwrap();
        assert!(body.layer_group.styles.is_empty());
        assert_eq!(body.layer_group.name, "odd");
    }

    #[test]
    fn create_body_shape() {
        let body = LayerGroupBody {
            layer_group: LayerGroup {
                name: "basemap".to_string(),
                mode: "SINGLE".to_string(),
                publishables: Publishables {
                    published: vec![TypedRef::new("layer", "topo:hillshade")],
                },
                styles: vec![crate::style::StyleRef::named("raster")].into(),
                ..LayerGroup::default()
            },
        };
        let raw = serde_json::to_value(&body).unwrap();
        let group = &raw["layerGroup"];
        assert_eq!(group["publishables"]["published"][0]["name"], "topo:hillshade");
        // Name-only style refs collapse to "" under the encode rule.
        assert_eq!(group["styles"]["style"][0], json!(""));
    }
}
