//! Bounding boxes and coordinate reference systems.

use serde::{Deserialize, Serialize};

/// A coordinate reference system as it appears on the wire.
///
/// GeoServer emits either a bare authority code (`"EPSG:4326"`) or, for
/// non-geographic systems, a classed object like
/// `{"@class": "projected", "$": "EPSG:26713"}`. Both shapes are mapped
/// structurally; no leniency is applied here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Crs {
    /// Bare authority code.
    Code(String),
    /// Classed form used for projected/engineering systems.
    Classed {
        /// CRS class, e.g. `projected`.
        #[serde(rename = "@class")]
        class: String,
        /// Authority code.
        #[serde(rename = "$")]
        code: String,
    },
}

impl Crs {
    /// The authority code regardless of wire shape.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::Code(code) | Self::Classed { code, .. } => code,
        }
    }
}

/// An axis-aligned bounding box with an optional CRS.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundingBox {
    /// Minimum easting.
    pub minx: f64,
    /// Maximum easting.
    pub maxx: f64,
    /// Minimum northing.
    pub miny: f64,
    /// Maximum northing.
    pub maxy: f64,
    /// Reference system of the coordinates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crs: Option<Crs>,
}

impl BoundingBox {
    /// The whole-world box in geographic coordinates.
    #[must_use]
    pub fn world() -> Self {
        Self {
            minx: -180.0,
            maxx: 180.0,
            miny: -90.0,
            maxy: 90.0,
            crs: Some(Crs::Code("EPSG:4326".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn crs_bare_code() {
        let crs: Crs = serde_json::from_value(json!("EPSG:4326")).unwrap();
        assert_eq!(crs.code(), "EPSG:4326");
    }

    #[test]
    fn crs_classed_form() {
        let crs: Crs =
            serde_json::from_value(json!({"@class": "projected", "$": "EPSG:26713"})).unwrap();
        assert_eq!(crs.code(), "EPSG:26713");
        let raw = serde_json::to_value(&crs).unwrap();
        assert_eq!(raw["@class"], "projected");
        assert_eq!(raw["$"], "EPSG:26713");
    }

    #[test]
    fn bbox_decodes_with_classed_crs() {
        let bbox: BoundingBox = serde_json::from_value(json!({
            "minx": 589425.93,
            "maxx": 609518.67,
            "miny": 4913959.22,
            "maxy": 4928082.94,
            "crs": {"@class": "projected", "$": "EPSG:26713"}
        }))
        .unwrap();
        assert!(bbox.minx < bbox.maxx);
        assert_eq!(bbox.crs.unwrap().code(), "EPSG:26713");
    }

    #[test]
    fn bbox_crs_optional() {
        let bbox: BoundingBox =
            serde_json::from_value(json!({"minx": 0.0, "maxx": 1.0, "miny": 0.0, "maxy": 1.0}))
                .unwrap();
        assert!(bbox.crs.is_none());
        let raw = serde_json::to_value(&bbox).unwrap();
        assert!(raw.get("crs").is_none());
    }

    #[test]
    fn wrong_typed_coordinate_is_an_error() {
        // Strict tier: a malformed box must not decode.
        let result: Result<BoundingBox, _> =
            serde_json::from_value(json!({"minx": "not-a-number"}));
        assert!(result.is_err());
    }
}
