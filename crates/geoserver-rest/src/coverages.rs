//! Coverage operations.

use geoserver_core::coverage::{Coverage, CoverageBody, CoveragesResponse};
use geoserver_core::ResourceRef;

use crate::client::GeoserverClient;
use crate::error::Error;

impl GeoserverClient {
    /// List the coverages published from a coverage store.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn get_coverages(
        &self,
        workspace: &str,
        store: &str,
    ) -> Result<Vec<ResourceRef>, Error> {
        let url = self.rest_url(&["workspaces", workspace, "coveragestores", store, "coverages"]);
        let resp: CoveragesResponse = self.get_json(url).await?;
        Ok(resp.coverages.coverage)
    }

    /// Fetch one coverage.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn get_coverage(
        &self,
        workspace: &str,
        store: &str,
        name: &str,
    ) -> Result<Coverage, Error> {
        let url = self.rest_url(&[
            "workspaces",
            workspace,
            "coveragestores",
            store,
            "coverages",
            name,
        ]);
        let resp: CoverageBody = self.get_json(url).await?;
        Ok(resp.coverage)
    }

    /// Publish a coverage from an existing coverage store.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn publish_coverage(
        &self,
        workspace: &str,
        store: &str,
        coverage: Coverage,
    ) -> Result<(), Error> {
        let url = self.rest_url(&["workspaces", workspace, "coveragestores", store, "coverages"]);
        self.post_json(url, &CoverageBody { coverage }).await
    }

    /// Unpublish a coverage; with `recurse`, dependent layers go too.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn delete_coverage(
        &self,
        workspace: &str,
        store: &str,
        name: &str,
        recurse: bool,
    ) -> Result<(), Error> {
        let mut url = self.rest_url(&[
            "workspaces",
            workspace,
            "coveragestores",
            store,
            "coverages",
            name,
        ]);
        if recurse {
            url.query_pairs_mut().append_pair("recurse", "true");
        }
        self.delete(url).await
    }
}
