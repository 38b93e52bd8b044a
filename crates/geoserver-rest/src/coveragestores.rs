//! Coverage store operations.

use geoserver_core::coveragestore::{CoverageStore, CoverageStoreBody, CoverageStoresResponse};
use geoserver_core::ResourceRef;

use crate::client::GeoserverClient;
use crate::error::Error;

impl GeoserverClient {
    /// List the coverage stores of a workspace.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn get_coveragestores(&self, workspace: &str) -> Result<Vec<ResourceRef>, Error> {
        let url = self.rest_url(&["workspaces", workspace, "coveragestores"]);
        let resp: CoverageStoresResponse = self.get_json(url).await?;
        Ok(resp.coverage_stores.coverage_store)
    }

    /// Fetch one coverage store.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn get_coveragestore(
        &self,
        workspace: &str,
        name: &str,
    ) -> Result<CoverageStore, Error> {
        let url = self.rest_url(&["workspaces", workspace, "coveragestores", name]);
        let resp: CoverageStoreBody = self.get_json(url).await?;
        Ok(resp.coverage_store)
    }

    /// Create a coverage store.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn create_coveragestore(
        &self,
        workspace: &str,
        coverage_store: CoverageStore,
    ) -> Result<(), Error> {
        let url = self.rest_url(&["workspaces", workspace, "coveragestores"]);
        self.post_json(url, &CoverageStoreBody { coverage_store })
            .await
    }

    /// Delete a coverage store. `recurse` removes published coverages;
    /// `purge` also removes the underlying raster files the server manages.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn delete_coveragestore(
        &self,
        workspace: &str,
        name: &str,
        recurse: bool,
        purge: bool,
    ) -> Result<(), Error> {
        let mut url = self.rest_url(&["workspaces", workspace, "coveragestores", name]);
        if recurse || purge {
            let mut query = url.query_pairs_mut();
            if recurse {
                query.append_pair("recurse", "true");
            }
            if purge {
                query.append_pair("purge", "all");
            }
        }
        self.delete(url).await
    }

    /// Upload raster data into a coverage store, creating the store when it
    /// does not exist yet. `format` is the store file extension GeoServer
    /// expects (`geotiff`, `arcgrid`, `imagemosaic`, ...); `content_type`
    /// must match the payload (e.g. `image/tiff` for GeoTIFF, or
    /// `application/zip` for a zipped mosaic).
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn upload_coverage_file(
        &self,
        workspace: &str,
        store: &str,
        format: &str,
        content_type: &str,
        data: Vec<u8>,
    ) -> Result<(), Error> {
        let file = format!("file.{format}");
        let url = self.rest_url(&["workspaces", workspace, "coveragestores", store, &file]);
        self.put_raw(url, content_type, data).await
    }
}
