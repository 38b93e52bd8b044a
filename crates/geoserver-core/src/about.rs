//! Server version information (`/about/version`).

use serde::Deserialize;
use serde_json::Value;

/// One entry in the version manifest (GeoServer, GeoTools, GeoWebCache).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VersionResource {
    /// Component name.
    #[serde(rename = "@name", default)]
    pub name: String,
    /// Component version. Kept as a raw value because some server builds
    /// emit it as a number (e.g. `2.23`) rather than a string.
    #[serde(rename = "Version", default)]
    pub version: Value,
    /// Build timestamp, when reported.
    #[serde(rename = "Build-Timestamp", default)]
    pub build_timestamp: String,
}

impl VersionResource {
    /// The version rendered as a string regardless of wire type.
    #[must_use]
    pub fn version_string(&self) -> String {
        match &self.version {
            Value::String(s) => s.clone(),
            Value::Null => String::new(),
            other => other.to_string(),
        }
    }
}

/// Inner manifest listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct About {
    /// Version entries per component.
    #[serde(default)]
    pub resource: Vec<VersionResource>,
}

/// Response wrapper for `/about/version`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AboutResponse {
    /// The wrapped manifest.
    pub about: About,
}

impl AboutResponse {
    /// The GeoServer component's version string, if present.
    #[must_use]
    pub fn geoserver_version(&self) -> Option<String> {
        self.about
            .resource
            .iter()
            .find(|r| r.name == "GeoServer")
            .map(VersionResource::version_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn string_version() {
        let resp: AboutResponse = serde_json::from_value(json!({
            "about": {"resource": [
                {"@name": "GeoServer", "Version": "2.23.2", "Build-Timestamp": "18-Jul-2023 04:31"},
                {"@name": "GeoTools", "Version": "29.2"}
            ]}
        }))
        .unwrap();
        assert_eq!(resp.geoserver_version().unwrap(), "2.23.2");
    }

    #[test]
    fn numeric_version_tolerated() {
        // Some builds coerce the version to a JSON number.
        let resp: AboutResponse = serde_json::from_value(json!({
            "about": {"resource": [{"@name": "GeoServer", "Version": 2.23}]}
        }))
        .unwrap();
        assert_eq!(resp.geoserver_version().unwrap(), "2.23");
    }

    #[test]
    fn missing_component_is_none() {
        let resp: AboutResponse =
            serde_json::from_value(json!({"about": {"resource": []}})).unwrap();
        assert!(resp.geoserver_version().is_none());
    }
}
