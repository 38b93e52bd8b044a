//! Vector data stores.

use serde::{Deserialize, Serialize};

use crate::refs::ResourceRef;

/// A single `{"@key": ..., "$": ...}` connection parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamEntry {
    /// Parameter name.
    #[serde(rename = "@key")]
    pub key: String,
    /// Parameter value.
    #[serde(rename = "$")]
    pub value: String,
}

impl ParamEntry {
    /// Build a parameter entry.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Connection parameters of a data store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionParams {
    /// Parameter entries in catalog order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entry: Vec<ParamEntry>,
}

impl ConnectionParams {
    /// True when there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entry.is_empty()
    }

    /// Value of the parameter with the given key, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entry
            .iter()
            .find(|e| e.key == key)
            .map(|e| e.value.as_str())
    }
}

impl<K, V> FromIterator<(K, V)> for ConnectionParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entry: iter
                .into_iter()
                .map(|(k, v)| ParamEntry::new(k, v))
                .collect(),
        }
    }
}

/// A data store: a connection to a vector data source.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DataStore {
    /// Store name, unique within its workspace.
    pub name: String,
    /// Free-form description.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Store type label, e.g. `PostGIS` or `Shapefile`.
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub type_: String,
    /// Whether the store is enabled.
    pub enabled: bool,
    /// Owning workspace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace: Option<ResourceRef>,
    /// Connection parameters for the backing source.
    #[serde(skip_serializing_if = "ConnectionParams::is_empty")]
    pub connection_parameters: ConnectionParams,
    /// Whether this is the workspace's default store.
    #[serde(rename = "_default", skip_serializing_if = "std::ops::Not::not")]
    pub default: bool,
    /// Link to the store's feature type listing.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub feature_types: String,
}

/// Request/response wrapper for a single data store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataStoreBody {
    /// The wrapped store.
    #[serde(rename = "dataStore")]
    pub data_store: DataStore,
}

/// Response wrapper for a data store listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DataStoresResponse {
    /// The wrapped listing.
    #[serde(rename = "dataStores")]
    pub data_stores: DataStoreRefs,
}

/// Inner listing of data store references.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DataStoreRefs {
    /// Name/href pairs for each store.
    #[serde(default, rename = "dataStore")]
    pub data_store: Vec<ResourceRef>,
}
