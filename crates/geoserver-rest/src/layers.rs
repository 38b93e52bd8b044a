//! Layer operations.
//!
//! Layers exist both globally (`/rest/layers`, names qualified as
//! `workspace:layer`) and per workspace. Operations here take an optional
//! workspace and fall back to the client's configured default; with neither,
//! the global endpoints are used.

use geoserver_core::layer::{Layer, LayerBody, LayersResponse};
use geoserver_core::{ResourceRef, StyleRef};

use crate::client::GeoserverClient;
use crate::error::Error;

impl GeoserverClient {
    fn layer_url(&self, workspace: Option<&str>, tail: &[&str]) -> url::Url {
        match self.scope(workspace) {
            Some(ws) => {
                let mut segments = vec!["workspaces", ws, "layers"];
                segments.extend_from_slice(tail);
                self.rest_url(&segments)
            }
            None => {
                let mut segments = vec!["layers"];
                segments.extend_from_slice(tail);
                self.rest_url(&segments)
            }
        }
    }

    /// List layers, scoped to a workspace when one is given or configured.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn get_layers(&self, workspace: Option<&str>) -> Result<Vec<ResourceRef>, Error> {
        let resp: LayersResponse = self.get_json(self.layer_url(workspace, &[])).await?;
        Ok(resp.layers.layer)
    }

    /// Fetch one layer.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn get_layer(&self, workspace: Option<&str>, name: &str) -> Result<Layer, Error> {
        let resp: LayerBody = self.get_json(self.layer_url(workspace, &[name])).await?;
        Ok(resp.layer)
    }

    /// Update a layer in place.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn update_layer(
        &self,
        workspace: Option<&str>,
        name: &str,
        layer: Layer,
    ) -> Result<(), Error> {
        self.put_json(self.layer_url(workspace, &[name]), &LayerBody { layer })
            .await
    }

    /// Make `style` the layer's default style, fetching the layer first so
    /// the rest of its configuration is carried through unchanged.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn set_layer_default_style(
        &self,
        workspace: Option<&str>,
        name: &str,
        style: &str,
    ) -> Result<(), Error> {
        let mut layer = self.get_layer(workspace, name).await?;
        // A name alone collapses to "" on the wire, so point the reference
        // at the style's REST resource.
        let mut href = self.rest_url(&["styles", style]);
        href.set_path(&format!("{}.json", href.path()));
        layer.default_style = StyleRef {
            name: style.to_string(),
            href: href.to_string(),
        };
        self.update_layer(workspace, name, layer).await
    }

    /// Remove a layer; with `recurse`, group memberships are cleaned up.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn delete_layer(
        &self,
        workspace: Option<&str>,
        name: &str,
        recurse: bool,
    ) -> Result<(), Error> {
        let mut url = self.layer_url(workspace, &[name]);
        if recurse {
            url.query_pairs_mut().append_pair("recurse", "true");
        }
        self.delete(url).await
    }
}
