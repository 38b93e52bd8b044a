//! Server version lookup.

use geoserver_core::AboutResponse;

use crate::client::GeoserverClient;
use crate::error::Error;

impl GeoserverClient {
    /// Fetch the server's version manifest (`/about/version`).
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn get_about(&self) -> Result<AboutResponse, Error> {
        let url = self.rest_url(&["about", "version"]);
        self.get_json(url).await
    }

    /// The GeoServer version string, e.g. `2.23.2`.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors, or [`Error::Parse`] if the
    /// manifest carries no GeoServer entry.
    pub async fn get_version(&self) -> Result<String, Error> {
        self.get_about().await?.geoserver_version().ok_or_else(|| {
            Error::Parse("version manifest has no GeoServer entry".to_string())
        })
    }
}
