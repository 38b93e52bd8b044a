//! Keyword lists.
//!
//! GeoServer wraps keyword lists in a `{"string": ...}` envelope whose inner
//! shape depends on cardinality: a bare string for one keyword, an array for
//! several, and the whole field may be missing. [`Keywords`] absorbs all of
//! those into one ordered list.

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

/// An ordered list of keywords attached to a published resource.
///
/// Decoding is best-effort: any shape other than the known envelope forms
/// yields an empty list instead of an error, so one odd field never sinks
/// the rest of the response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Keywords(pub Vec<String>);

impl Keywords {
    /// Build a keyword list from string-ish items.
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(items.into_iter().map(Into::into).collect())
    }

    /// True when the list has no keywords.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of keywords.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Keywords as a string slice view.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    // Try single string, then string array, then give up to empty.
    fn from_value(raw: &Value) -> Self {
        let Some(inner) = raw.get("string") else {
            return Self::default();
        };
        match inner {
            Value::String(s) => Self(vec![s.clone()]),
            Value::Array(items) => {
                let mut out = Vec::with_capacity(items.len());
                for item in items {
                    match item.as_str() {
                        Some(s) => out.push(s.to_string()),
                        None => return Self::default(),
                    }
                }
                Self(out)
            }
            _ => Self::default(),
        }
    }
}

impl From<Vec<String>> for Keywords {
    fn from(items: Vec<String>) -> Self {
        Self(items)
    }
}

impl<'de> Deserialize<'de> for Keywords {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&raw))
    }
}

impl Serialize for Keywords {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry("string", &self.0)?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn single_string_envelope() {
        let kw: Keywords = serde_json::from_value(json!({"string": "features"})).unwrap();
        assert_eq!(kw.as_slice(), ["features"]);
    }

    #[test]
    fn array_envelope_keeps_order() {
        let kw: Keywords =
            serde_json::from_value(json!({"string": ["roads", "osm", "lines"]})).unwrap();
        assert_eq!(kw.as_slice(), ["roads", "osm", "lines"]);
    }

    #[test]
    fn missing_envelope_is_empty() {
        let kw: Keywords = serde_json::from_value(json!({})).unwrap();
        assert!(kw.is_empty());
    }

    #[test]
    fn null_is_empty() {
        let kw: Keywords = serde_json::from_value(json!(null)).unwrap();
        assert!(kw.is_empty());
    }

    #[test]
    fn unexpected_shapes_degrade_without_error() {
        // None of these are valid keyword envelopes; all must decode to empty.
        for raw in [
            json!("bare"),
            json!(42),
            json!({"string": {"nested": true}}),
            json!({"string": 7}),
            json!([1, 2, 3]),
        ] {
            let kw: Keywords = serde_json::from_value(raw).unwrap();
            assert!(kw.is_empty());
        }
    }

    #[test]
    fn non_string_array_member_degrades_whole_field() {
        let kw: Keywords = serde_json::from_value(json!({"string": ["a", 2]})).unwrap();
        assert!(kw.is_empty());
    }

    #[test]
    fn encodes_as_array_envelope() {
        let kw = Keywords::new(["a", "b"]);
        let raw = serde_json::to_value(&kw).unwrap();
        assert_eq!(raw, json!({"string": ["a", "b"]}));
    }

    #[test]
    fn roundtrip_multi() {
        let kw = Keywords::new(["topo", "contours"]);
        let raw = serde_json::to_value(&kw).unwrap();
        let back: Keywords = serde_json::from_value(raw).unwrap();
        assert_eq!(back, kw);
    }
}
