//! Raster coverage stores.

use serde::{Deserialize, Serialize};

use crate::refs::ResourceRef;

/// A coverage store: a connection to a raster data source.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CoverageStore {
    /// Store name, unique within its workspace.
    pub name: String,
    /// Free-form description.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Raster format, e.g. `GeoTIFF` or `ImageMosaic`.
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub type_: String,
    /// Whether the store is enabled.
    pub enabled: bool,
    /// Owning workspace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace: Option<ResourceRef>,
    /// Whether this is the workspace's default store.
    #[serde(rename = "_default", skip_serializing_if = "std::ops::Not::not")]
    pub default: bool,
    /// Location of the backing file or directory.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,
    /// Link to the store's coverage listing.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub coverages: String,
}

/// Request/response wrapper for a single coverage store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverageStoreBody {
    /// The wrapped store.
    #[serde(rename = "coverageStore")]
    pub coverage_store: CoverageStore,
}

/// Response wrapper for a coverage store listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CoverageStoresResponse {
    /// The wrapped listing.
    #[serde(rename = "coverageStores")]
    pub coverage_stores: CoverageStoreRefs,
}

/// Inner listing of coverage store references.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CoverageStoreRefs {
    /// Name/href pairs for each store.
    #[serde(default, rename = "coverageStore")]
    pub coverage_store: Vec<ResourceRef>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decode_geotiff_store() {
        let body: CoverageStoreBody = serde_json::from_value(json!({
            "coverageStore": {
                "name": "arcGridSample",
                "type": "ArcGrid",
                "enabled": true,
                "workspace": {"name": "nurc"},
                "_default": false,
                "url": "file:coverages/arc_sample/precip30min.asc",
                "coverages": "http://localhost:8080/geoserver/rest/workspaces/nurc/coveragestores/arcGridSample/coverages.json"
            }
        }))
        .unwrap();
        assert_eq!(body.coverage_store.type_, "ArcGrid");
        assert!(body.coverage_store.url.starts_with("file:"));
    }

    #[test]
    fn create_body_omits_blank_fields() {
        let body = CoverageStoreBody {
            coverage_store: CoverageStore {
                name: "dem".to_string(),
                type_: "GeoTIFF".to_string(),
                enabled: true,
                workspace: Some(ResourceRef::named("topo")),
                url: "file:data/dem.tif".to_string(),
                ..CoverageStore::default()
            },
        };
        let raw = serde_json::to_value(&body).unwrap();
        let store = &raw["coverageStore"];
        assert_eq!(store["type"], "GeoTIFF");
        assert!(store.get("description").is_none());
        assert!(store.get("_default").is_none());
        assert!(store.get("coverages").is_none());
    }

    #[test]
    fn listing_decodes() {
        let resp: CoverageStoresResponse = serde_json::from_value(json!({
            "coverageStores": {"coverageStore": [{"name": "dem"}, {"name": "mosaic"}]}
        }))
        .unwrap();
        assert_eq!(resp.coverage_stores.coverage_store.len(), 2);
    }
}
