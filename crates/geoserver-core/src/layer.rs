//! Published layers.

use serde::{Deserialize, Serialize};

use crate::refs::TypedRef;
use crate::style::{StyleList, StyleRef};

/// Attribution shown for a layer in capabilities documents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Attribution {
    /// Attribution title.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    /// Attribution link.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub href: String,
    /// Logo width in pixels.
    pub logo_width: i32,
    /// Logo height in pixels.
    pub logo_height: i32,
}

/// A published layer tying a resource to its styling.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Layer {
    /// Layer name.
    pub name: String,
    /// Layer kind, `VECTOR` or `RASTER`.
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub type_: String,
    /// Directory path in the layer tree.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub path: String,
    /// Default style; lenient tri-shape field. Encodes as the empty string
    /// when unset, the form GeoServer accepts for "no style".
    pub default_style: StyleRef,
    /// Alternate styles; lenient envelope field.
    #[serde(skip_serializing_if = "StyleList::is_empty")]
    pub styles: StyleList,
    /// The published resource (feature type or coverage).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<TypedRef>,
    /// Whether the layer answers GetFeatureInfo.
    pub queryable: bool,
    /// Whether the layer hides layers beneath it in groups.
    pub opaque: bool,
    /// Attribution block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribution: Option<Attribution>,
}

/// Request/response wrapper for a single layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayerBody {
    /// The wrapped layer.
    pub layer: Layer,
}

/// Response wrapper for a layer listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LayersResponse {
    /// The wrapped listing.
    pub layers: LayerRefs,
}

/// Inner listing of layer references.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LayerRefs {
    /// Name/href pairs for each layer.
    #[serde(default)]
    pub layer: Vec<crate::refs::ResourceRef>,
}
