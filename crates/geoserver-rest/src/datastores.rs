//! Data store operations.

use geoserver_core::datastore::{DataStore, DataStoreBody, DataStoresResponse};
use geoserver_core::ResourceRef;

use crate::client::GeoserverClient;
use crate::error::Error;

impl GeoserverClient {
    /// List the data stores of a workspace.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn get_datastores(&self, workspace: &str) -> Result<Vec<ResourceRef>, Error> {
        let url = self.rest_url(&["workspaces", workspace, "datastores"]);
        let resp: DataStoresResponse = self.get_json(url).await?;
        Ok(resp.data_stores.data_store)
    }

    /// Fetch one data store.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn get_datastore(&self, workspace: &str, name: &str) -> Result<DataStore, Error> {
        let url = self.rest_url(&["workspaces", workspace, "datastores", name]);
        let resp: DataStoreBody = self.get_json(url).await?;
        Ok(resp.data_store)
    }

    /// Create a data store from a full store body, connection parameters
    /// included.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn create_datastore(
        &self,
        workspace: &str,
        data_store: DataStore,
    ) -> Result<(), Error> {
        let url = self.rest_url(&["workspaces", workspace, "datastores"]);
        self.post_json(url, &DataStoreBody { data_store }).await
    }

    /// Update a data store in place.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn update_datastore(
        &self,
        workspace: &str,
        name: &str,
        data_store: DataStore,
    ) -> Result<(), Error> {
        let url = self.rest_url(&["workspaces", workspace, "datastores", name]);
        self.put_json(url, &DataStoreBody { data_store }).await
    }

    /// Delete a data store; with `recurse`, published feature types go too.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn delete_datastore(
        &self,
        workspace: &str,
        name: &str,
        recurse: bool,
    ) -> Result<(), Error> {
        let mut url = self.rest_url(&["workspaces", workspace, "datastores", name]);
        if recurse {
            url.query_pairs_mut().append_pair("recurse", "true");
        }
        self.delete(url).await
    }
}
