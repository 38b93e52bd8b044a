//! Workspace operations.

use geoserver_core::workspace::{Workspace, WorkspaceBody, WorkspacesResponse};
use geoserver_core::ResourceRef;

use crate::client::GeoserverClient;
use crate::error::Error;

impl GeoserverClient {
    /// List all workspaces.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn get_workspaces(&self) -> Result<Vec<ResourceRef>, Error> {
        let url = self.rest_url(&["workspaces"]);
        let resp: WorkspacesResponse = self.get_json(url).await?;
        Ok(resp.workspaces.workspace)
    }

    /// Fetch one workspace by name.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors; a missing workspace is
    /// [`Error::Api`] with status 404.
    pub async fn get_workspace(&self, name: &str) -> Result<Workspace, Error> {
        let url = self.rest_url(&["workspaces", name]);
        let resp: WorkspaceBody = self.get_json(url).await?;
        Ok(resp.workspace)
    }

    /// Whether a workspace with the given name exists.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors other than 404.
    pub async fn workspace_exists(&self, name: &str) -> Result<bool, Error> {
        match self.get_workspace(name).await {
            Ok(_) => Ok(true),
            Err(err) if err.is_not_found() => Ok(false),
            Err(err) => Err(err),
        }
    }

    /// Create a workspace.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors; a name collision surfaces as
    /// the server's own conflict status.
    pub async fn create_workspace(&self, workspace: Workspace) -> Result<(), Error> {
        let url = self.rest_url(&["workspaces"]);
        self.post_json(url, &WorkspaceBody { workspace }).await
    }

    /// Update a workspace in place (e.g. rename or toggle isolation).
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn update_workspace(&self, name: &str, workspace: Workspace) -> Result<(), Error> {
        let url = self.rest_url(&["workspaces", name]);
        self.put_json(url, &WorkspaceBody { workspace }).await
    }

    /// Delete a workspace. With `recurse`, contained stores and resources
    /// are removed too; without it, a non-empty workspace is refused by the
    /// server.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn delete_workspace(&self, name: &str, recurse: bool) -> Result<(), Error> {
        let mut url = self.rest_url(&["workspaces", name]);
        if recurse {
            url.query_pairs_mut().append_pair("recurse", "true");
        }
        self.delete(url).await
    }
}
