//! Feature type operations.

use geoserver_core::featuretype::{FeatureType, FeatureTypeBody, FeatureTypesResponse};
use geoserver_core::ResourceRef;

use crate::client::GeoserverClient;
use crate::error::Error;

impl GeoserverClient {
    /// List the feature types published from a data store.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn get_feature_types(
        &self,
        workspace: &str,
        store: &str,
    ) -> Result<Vec<ResourceRef>, Error> {
        let url = self.rest_url(&["workspaces", workspace, "datastores", store, "featuretypes"]);
        let resp: FeatureTypesResponse = self.get_json(url).await?;
        Ok(resp.feature_types.feature_type)
    }

    /// Fetch one feature type.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn get_feature_type(
        &self,
        workspace: &str,
        store: &str,
        name: &str,
    ) -> Result<FeatureType, Error> {
        let url = self.rest_url(&[
            "workspaces",
            workspace,
            "datastores",
            store,
            "featuretypes",
            name,
        ]);
        let resp: FeatureTypeBody = self.get_json(url).await?;
        Ok(resp.feature_type)
    }

    /// Publish a feature type from an existing data store table.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn publish_feature_type(
        &self,
        workspace: &str,
        store: &str,
        feature_type: FeatureType,
    ) -> Result<(), Error> {
        let url = self.rest_url(&["workspaces", workspace, "datastores", store, "featuretypes"]);
        self.post_json(url, &FeatureTypeBody { feature_type }).await
    }

    /// Unpublish a feature type; with `recurse`, dependent layers go too.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn delete_feature_type(
        &self,
        workspace: &str,
        store: &str,
        name: &str,
        recurse: bool,
    ) -> Result<(), Error> {
        let mut url = self.rest_url(&[
            "workspaces",
            workspace,
            "datastores",
            store,
            "featuretypes",
            name,
        ]);
        if recurse {
            url.query_pairs_mut().append_pair("recurse", "true");
        }
        self.delete(url).await
    }
}
