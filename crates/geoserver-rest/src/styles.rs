//! Style operations.

use geoserver_core::style::{StyleBody, StyleInfo, StylesResponse};
use geoserver_core::ResourceRef;

use crate::client::GeoserverClient;
use crate::error::Error;

/// Content type GeoServer expects for SLD 1.0 bodies.
const SLD_CONTENT_TYPE: &str = "application/vnd.ogc.sld+xml";

impl GeoserverClient {
    fn style_url(&self, workspace: Option<&str>, tail: &[&str]) -> url::Url {
        match self.scope(workspace) {
            Some(ws) => {
                let mut segments = vec!["workspaces", ws, "styles"];
                segments.extend_from_slice(tail);
                self.rest_url(&segments)
            }
            None => {
                let mut segments = vec!["styles"];
                segments.extend_from_slice(tail);
                self.rest_url(&segments)
            }
        }
    }

    /// List styles, scoped to a workspace when one is given or configured.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn get_styles(&self, workspace: Option<&str>) -> Result<Vec<ResourceRef>, Error> {
        let resp: StylesResponse = self.get_json(self.style_url(workspace, &[])).await?;
        Ok(resp.styles.style)
    }

    /// Fetch one style's catalog record (not its SLD body).
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn get_style(
        &self,
        workspace: Option<&str>,
        name: &str,
    ) -> Result<StyleInfo, Error> {
        let resp: StyleBody = self.get_json(self.style_url(workspace, &[name])).await?;
        Ok(resp.style)
    }

    /// Register a new style entry named `name`, backed by `{name}.sld`.
    /// The SLD body is uploaded separately with [`Self::upload_style_sld`].
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn create_style(&self, workspace: Option<&str>, name: &str) -> Result<(), Error> {
        let style = StyleInfo {
            name: name.to_string(),
            filename: format!("{name}.sld"),
            ..StyleInfo::default()
        };
        self.post_json(self.style_url(workspace, &[]), &StyleBody { style })
            .await
    }

    /// Upload (or replace) the SLD body of an existing style.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors, including the server's own
    /// validation failure for malformed SLD.
    pub async fn upload_style_sld(
        &self,
        workspace: Option<&str>,
        name: &str,
        sld: String,
    ) -> Result<(), Error> {
        self.put_raw(
            self.style_url(workspace, &[name]),
            SLD_CONTENT_TYPE,
            sld.into_bytes(),
        )
        .await
    }

    /// Delete a style; with `purge`, the SLD file on disk is removed too.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors; deleting a style still
    /// referenced by a layer is refused by the server.
    pub async fn delete_style(
        &self,
        workspace: Option<&str>,
        name: &str,
        purge: bool,
    ) -> Result<(), Error> {
        let mut url = self.style_url(workspace, &[name]);
        if purge {
            url.query_pairs_mut().append_pair("purge", "true");
        }
        self.delete(url).await
    }
}
