//! Layer group operations.

use geoserver_core::layergroup::{LayerGroup, LayerGroupBody, LayerGroupsResponse};
use geoserver_core::ResourceRef;

use crate::client::GeoserverClient;
use crate::error::Error;

impl GeoserverClient {
    fn group_url(&self, workspace: Option<&str>, tail: &[&str]) -> url::Url {
        match self.scope(workspace) {
            Some(ws) => {
                let mut segments = vec!["workspaces", ws, "layergroups"];
                segments.extend_from_slice(tail);
                self.rest_url(&segments)
            }
            None => {
                let mut segments = vec!["layergroups"];
                segments.extend_from_slice(tail);
                self.rest_url(&segments)
            }
        }
    }

    /// List layer groups, scoped to a workspace when one is given or
    /// configured.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn get_layer_groups(
        &self,
        workspace: Option<&str>,
    ) -> Result<Vec<ResourceRef>, Error> {
        let resp: LayerGroupsResponse = self.get_json(self.group_url(workspace, &[])).await?;
        Ok(resp.layer_groups.layer_group)
    }

    /// Fetch one layer group.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn get_layer_group(
        &self,
        workspace: Option<&str>,
        name: &str,
    ) -> Result<LayerGroup, Error> {
        let resp: LayerGroupBody = self.get_json(self.group_url(workspace, &[name])).await?;
        Ok(resp.layer_group)
    }

    /// Create a layer group.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn create_layer_group(
        &self,
        workspace: Option<&str>,
        layer_group: LayerGroup,
    ) -> Result<(), Error> {
        self.post_json(self.group_url(workspace, &[]), &LayerGroupBody { layer_group })
            .await
    }

    /// Update a layer group in place.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn update_layer_group(
        &self,
        workspace: Option<&str>,
        name: &str,
        layer_group: LayerGroup,
    ) -> Result<(), Error> {
        self.put_json(self.group_url(workspace, &[name]), &LayerGroupBody { layer_group })
            .await
    }

    /// Delete a layer group. Member layers are untouched.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn delete_layer_group(
        &self,
        workspace: Option<&str>,
        name: &str,
    ) -> Result<(), Error> {
        self.delete(self.group_url(workspace, &[name])).await
    }
}
