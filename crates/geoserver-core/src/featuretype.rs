//! Published vector feature types.

use serde::{Deserialize, Serialize};

use crate::bounds::BoundingBox;
use crate::keywords::Keywords;
use crate::refs::TypedRef;

/// An attribute (column) of a feature type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Attribute {
    /// Attribute name.
    pub name: String,
    /// Minimum occurrences (0 for optional).
    pub min_occurs: i32,
    /// Maximum occurrences.
    pub max_occurs: i32,
    /// Whether the attribute accepts nulls.
    pub nillable: bool,
    /// Fully qualified Java binding of the value type.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub binding: String,
}

/// Attribute list wrapper.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Attributes {
    /// Attributes in schema order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attribute: Vec<Attribute>,
}

/// A feature type: a vector resource published from a data store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeatureType {
    /// Published name.
    pub name: String,
    /// Name of the underlying table/file when it differs from `name`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub native_name: String,
    /// Human-readable title.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    /// Abstract shown in capabilities documents.
    #[serde(rename = "abstract", skip_serializing_if = "String::is_empty")]
    pub r#abstract: String,
    /// Keywords, in the lenient `{"string": ...}` envelope.
    #[serde(skip_serializing_if = "Keywords::is_empty")]
    pub keywords: Keywords,
    /// Declared spatial reference system.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub srs: String,
    /// Bounds in the native CRS.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub native_bounding_box: Option<BoundingBox>,
    /// Bounds in geographic coordinates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat_lon_bounding_box: Option<BoundingBox>,
    /// How declared and native SRS interact, e.g. `FORCE_DECLARED`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub projection_policy: String,
    /// Whether the resource is enabled.
    pub enabled: bool,
    /// Owning store.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store: Option<TypedRef>,
    /// Schema attributes.
    #[serde(skip_serializing_if = "Attributes::is_empty")]
    pub attributes: Attributes,
}

impl Attributes {
    /// True when no attributes are listed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attribute.is_empty()
    }
}

/// Request/response wrapper for a single feature type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureTypeBody {
    /// The wrapped feature type.
    #[serde(rename = "featureType")]
    pub feature_type: FeatureType,
}

/// Response wrapper for a feature type listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeatureTypesResponse {
    /// The wrapped listing.
    #[serde(rename = "featureTypes")]
    pub feature_types: FeatureTypeRefs,
}

/// Inner listing of feature type references.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeatureTypeRefs {
    /// Name/href pairs for each feature type.
    #[serde(default, rename = "featureType")]
    pub feature_type: Vec<crate::refs::ResourceRef>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decode_published_type() {
        let body: FeatureTypeBody = serde_json::from_value(json!({
            "featureType": {
                "name": "roads",
                "nativeName": "roads",
                "title": "Spearfish roads",
                "keywords": {"string": ["roads", "spearfish"]},
                "srs": "EPSG:26713",
                "nativeBoundingBox": {
                    "minx": 589434.85, "maxx": 609527.21,
                    "miny": 4914006.33, "maxy": 4928063.39,
                    "crs": {"@class": "projected", "$": "EPSG:26713"}
                },
                "latLonBoundingBox": {
                    "minx": -103.87, "maxx": -103.62,
                    "miny": 44.37, "maxy": 44.50,
                    "crs": "EPSG:4326"
                },
                "projectionPolicy": "REPROJECT_TO_DECLARED",
                "enabled": true,
                "store": {
                    "@class": "dataStore",
                    "name": "sf:sf",
                    "href": "http://localhost:8080/geoserver/rest/workspaces/sf/datastores/sf.json"
                },
                "attributes": {
                    "attribute": [
                        {"name": "the_geom", "minOccurs": 0, "maxOccurs": 1, "nillable": true,
                         "binding": "org.locationtech.jts.geom.MultiLineString"},
                        {"name": "cat", "minOccurs": 0, "maxOccurs": 1, "nillable": true,
                         "binding": "java.lang.Long"}
                    ]
                }
            }
        }))
        .unwrap();
        let ft = body.feature_type;
        assert_eq!(ft.keywords.as_slice(), ["roads", "spearfish"]);
        assert_eq!(ft.store.unwrap().class, "dataStore");
        assert_eq!(ft.attributes.attribute.len(), 2);
        assert_eq!(ft.attributes.attribute[0].name, "the_geom");
    }

    #[test]
    fn single_keyword_envelope_tolerated() {
        let body: FeatureTypeBody = serde_json::from_value(json!({
            "featureType": {"name": "poi", "keywords": {"string": "points"}}
        }))
        .unwrap();
        assert_eq!(body.feature_type.keywords.as_slice(), ["points"]);
    }

    #[test]
    fn garbled_keywords_do_not_sink_the_record() {
        let body: FeatureTypeBody = serde_json::from_value(json!({
            "featureType": {"name": "poi", "enabled": true, "keywords": 17}
        }))
        .unwrap();
        assert!(body.feature_type.keywords.is_empty());
        assert!(body.feature_type.enabled);
    }

    #[test]
    fn publish_body_is_minimal() {
        let body = FeatureTypeBody {
            feature_type: FeatureType {
                name: "parcels".to_string(),
                native_name: "parcels_2024".to_string(),
                srs: "EPSG:4326".to_string(),
                enabled: true,
                ..FeatureType::default()
            },
        };
        let raw = serde_json::to_value(&body).unwrap();
        let ft = &raw["featureType"];
        assert_eq!(ft["nativeName"], "parcels_2024");
        assert!(ft.get("keywords").is_none());
        assert!(ft.get("attributes").is_none());
        assert!(ft.get("abstract").is_none());
    }
}
