//! Published raster coverages.

use serde::{Deserialize, Serialize};

use crate::bounds::BoundingBox;
use crate::keywords::Keywords;
use crate::refs::TypedRef;

/// A coverage: a raster resource published from a coverage store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Coverage {
    /// Published name.
    pub name: String,
    /// Name of the underlying raster when it differs from `name`.
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
    /// Whether the resource is enabled.
    pub enabled: bool,
    /// Raster format of the source, e.g. `GeoTIFF`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub native_format: String,
    /// Owning store.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store: Option<TypedRef>,
}

/// Request/response wrapper for a single coverage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverageBody {
    /// The wrapped coverage.
    pub coverage: Coverage,
}

/// Response wrapper for a coverage listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CoveragesResponse {
    /// The wrapped listing.
    pub coverages: CoverageRefs,
}

/// Inner listing of coverage references.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CoverageRefs {
    /// Name/href pairs for each coverage.
    #[serde(default)]
    pub coverage: Vec<crate::refs::ResourceRef>,
}
