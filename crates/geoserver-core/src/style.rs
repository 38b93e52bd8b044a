//! Styles and style references.
//!
//! Style fields are the least stable part of GeoServer's JSON projection:
//! depending on the endpoint and server version a style reference arrives as
//! a `{"name","href"}` object, a bare name string, or not at all, and layer
//! group style lists additionally wrap the whole thing in a `{"style": ...}`
//! envelope that may itself collapse to a single object or string. The types
//! here pin all of that to one stable shape on the Rust side.

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

use crate::refs::ResourceRef;

/// A reference to a style by name, optionally with its REST link.
///
/// Decoding never fails: unrecognized shapes collapse to the zero value.
/// Encoding emits the `{"name","href"}` object only when both members are
/// non-empty after trimming; otherwise it emits the empty string literal,
/// which is the form GeoServer accepts for "no style" (it rejects objects
/// with blank members).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleRef {
    /// Style name.
    pub name: String,
    /// REST link to the style resource, when the server provided one.
    pub href: String,
}

impl StyleRef {
    /// Reference a style by name alone.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            href: String::new(),
        }
    }

    /// True when both name and href are blank after trimming.
    #[must_use]
    pub fn is_unset(&self) -> bool {
        self.name.trim().is_empty() && self.href.trim().is_empty()
    }

    // Object, bare string, or zero value; never an error.
    pub(crate) fn from_value(raw: &Value) -> Self {
        match raw {
            Value::String(s) => Self {
                name: s.clone(),
                href: String::new(),
            },
            Value::Object(map) => Self {
                name: map
                    .get("name")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
                href: map
                    .get("href")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
            },
            _ => Self::default(),
        }
    }
}

impl<'de> Deserialize<'de> for StyleRef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&raw))
    }
}

impl Serialize for StyleRef {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let name = self.name.trim();
        let href = self.href.trim();
        if name.is_empty() || href.is_empty() {
            serializer.serialize_str("")
        } else {
            let mut map = serializer.serialize_map(Some(2))?;
            map.serialize_entry("name", name)?;
            map.serialize_entry("href", href)?;
            map.end()
        }
    }
}

/// An ordered list of style references, as carried by layer groups.
///
/// Accepts the `{"style": ...}` envelope, a bare array, a single object, or
/// a bare string (treated as a one-element list). Encodes as the envelope
/// form with each entry under the [`StyleRef`] encode rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleList(pub Vec<StyleRef>);

impl StyleList {
    /// True when the list has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    fn from_value(raw: &Value) -> Self {
        match raw {
            Value::Object(map) if map.contains_key("style") => Self::from_entries(&map["style"]),
            _ => Self::from_entries(raw),
        }
    }

    fn from_entries(raw: &Value) -> Self {
        match raw {
            Value::Array(items) => Self(items.iter().map(StyleRef::from_value).collect()),
            Value::String(_) | Value::Object(_) => Self(vec![StyleRef::from_value(raw)]),
            _ => Self::default(),
        }
    }
}

impl From<Vec<StyleRef>> for StyleList {
    fn from(items: Vec<StyleRef>) -> Self {
        Self(items)
    }
}

impl<'de> Deserialize<'de> for StyleList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&raw))
    }
}

impl Serialize for StyleList {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry("style", &self.0)?;
        map.end()
    }
}

/// Version of the styling language a style is written in.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LanguageVersion {
    /// Language version, e.g. `1.0.0` for SLD 1.0.
    pub version: String,
}

/// A style resource in the catalog.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleInfo {
    /// Style name.
    pub name: String,
    /// Style format, typically `sld`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub format: String,
    /// Name of the file holding the style body on the server.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub filename: String,
    /// Styling language version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_version: Option<LanguageVersion>,
    /// Owning workspace for workspace-local styles.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace: Option<ResourceRef>,
}

/// Request/response wrapper for a single style.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct StyleBody {
    /// The wrapped style.
    pub style: StyleInfo,
}

/// Response wrapper for a style listing.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct StylesResponse {
    /// The wrapped listing.
    pub styles: StyleRefs,
}

/// Inner listing of style references.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct StyleRefs {
    /// Name/href pairs for each style.
    #[serde(default)]
    pub style: Vec<ResourceRef>,
}
