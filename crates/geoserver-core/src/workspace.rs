//! Workspaces.

use serde::{Deserialize, Serialize};

use crate::refs::ResourceRef;

/// A workspace (namespace) grouping stores and published resources.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Workspace {
    /// Workspace name.
    pub name: String,
    /// Whether the workspace is isolated from global queries.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub isolated: bool,
}

impl Workspace {
    /// A non-isolated workspace with the given name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            isolated: false,
        }
    }
}

/// Request/response wrapper for a single workspace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspaceBody {
    /// The wrapped workspace.
    pub workspace: Workspace,
}

/// Response wrapper for a workspace listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkspacesResponse {
    /// The wrapped listing.
    pub workspaces: WorkspaceRefs,
}

/// Inner listing of workspace references.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkspaceRefs {
    /// Name/href pairs for each workspace.
    #[serde(default)]
    pub workspace: Vec<ResourceRef>,
}
