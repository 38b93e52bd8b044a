//! HTTP client for the GeoServer REST API.

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use url::Url;

use crate::error::Error;
use crate::paths::encode_segment;

/// Connection configuration for a GeoServer instance.
///
/// Built with [`Default`] plus the `with_*` methods, applied in any order
/// the caller likes. Each [`GeoserverClient`] keeps its own copy, so two
/// clients pointed at different servers or workspaces never share state.
#[derive(Debug, Clone)]
pub struct GeoserverConfig {
    /// Base URL of the GeoServer web application
    /// (e.g. <http://localhost:8080/geoserver>).
    pub base_url: String,
    /// Basic auth user.
    pub username: String,
    /// Basic auth password.
    pub password: String,
    /// Workspace used when an operation takes no explicit workspace.
    pub workspace: Option<String>,
    /// Request timeout.
    pub timeout: Duration,
}

impl Default for GeoserverConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080/geoserver".to_string(),
            username: "admin".to_string(),
            password: "geoserver".to_string(),
            workspace: None,
            timeout: Duration::from_secs(30),
        }
    }
}

impl GeoserverConfig {
    /// Point the config at a server.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set Basic auth credentials.
    #[must_use]
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = username.into();
        self.password = password.into();
        self
    }

    /// Set the default workspace context.
    #[must_use]
    pub fn with_workspace(mut self, workspace: impl Into<String>) -> Self {
        self.workspace = Some(workspace.into());
        self
    }

    /// Set the per-request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Client for GeoServer REST operations.
///
/// Every operation is one request/response round trip; the client holds no
/// state besides its configuration, issues no retries, and imposes no
/// ordering across calls.
pub struct GeoserverClient {
    http: Client,
    base: Url,
    config: GeoserverConfig,
}

impl GeoserverClient {
    /// Create a new client.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Url`] if the base URL does not parse and
    /// [`Error::Init`] if the HTTP client cannot be built.
    pub fn new(config: GeoserverConfig) -> Result<Self, Error> {
        let base = Url::parse(&config.base_url).map_err(|e| Error::Url(e.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(Error::Url(format!(
                "base URL {} cannot carry a path",
                config.base_url
            )));
        }

        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::Init(e.to_string()))?;

        Ok(Self { http, base, config })
    }

    /// The configuration this client was built with.
    #[must_use]
    pub fn config(&self) -> &GeoserverConfig {
        &self.config
    }

    /// Explicit workspace if given, otherwise the configured default.
    pub(crate) fn scope<'a>(&'a self, workspace: Option<&'a str>) -> Option<&'a str> {
        workspace.or(self.config.workspace.as_deref())
    }

    /// Build a REST URL from raw catalog names, one encoded segment each.
    pub(crate) fn rest_url(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        let mut path = url.path().trim_end_matches('/').to_string();
        path.push_str("/rest");
        for segment in segments {
            path.push('/');
            path.push_str(&encode_segment(segment));
        }
        url.set_path(&path);
        url
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response, Error> {
        let response = request
            .basic_auth(&self.config.username, Some(&self.config.password))
            .send()
            .await
            .map_err(|e| Error::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Api {
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }
        Ok(response)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        tracing::debug!(%url, "GET");
        let response = self
            .send(self.http.get(url).header(ACCEPT, "application/json"))
            .await?;
        response
            .json()
            .await
            .map_err(|e| Error::Parse(e.to_string()))
    }

    pub(crate) async fn post_json<B: Serialize>(&self, url: Url, body: &B) -> Result<(), Error> {
        tracing::debug!(%url, "POST");
        self.send(self.http.post(url).json(body)).await?;
        Ok(())
    }

    pub(crate) async fn put_json<B: Serialize>(&self, url: Url, body: &B) -> Result<(), Error> {
        tracing::debug!(%url, "PUT");
        self.send(self.http.put(url).json(body)).await?;
        Ok(())
    }

    pub(crate) async fn put_raw(
        &self,
        url: Url,
        content_type: &str,
        body: Vec<u8>,
    ) -> Result<(), Error> {
        tracing::debug!(%url, content_type, bytes = body.len(), "PUT");
        self.send(
            self.http
                .put(url)
                .header(CONTENT_TYPE, content_type)
                .body(body),
        )
        .await?;
        Ok(())
    }

    pub(crate) async fn delete(&self, url: Url) -> Result<(), Error> {
        tracing::debug!(%url, "DELETE");
        self.send(self.http.delete(url)).await?;
        Ok(())
    }
}
