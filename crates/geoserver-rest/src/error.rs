//! Client error type.

/// Errors surfaced by [`GeoserverClient`](crate::GeoserverClient) operations.
///
/// Transport failures and non-2xx statuses pass through unchanged; there is
/// no retry and no interpretation of server error bodies.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// Client initialization failed
    #[error("client init error: {0}")]
    Init(String),
    /// The configured base URL is unusable
    #[error("invalid base URL: {0}")]
    Url(String),
    /// HTTP request failed before a response arrived
    #[error("request error: {0}")]
    Request(String),
    /// GeoServer returned an error status
    #[error("API error (status {status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body text from the server
        message: String,
    },
    /// Response body did not match the expected strict shape
    #[error("parse error: {0}")]
    Parse(String),
}

impl Error {
    /// True when this is a 404 from the server.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Api { status: 404, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display() {
        let err = Error::Api {
            status: 401,
            message: "Unauthorized".to_string(),
        };
        assert_eq!(err.to_string(), "API error (status 401): Unauthorized");
    }

    #[test]
    fn not_found_detection() {
        let missing = Error::Api {
            status: 404,
            message: String::new(),
        };
        assert!(missing.is_not_found());
        assert!(!Error::Request("refused".to_string()).is_not_found());
    }
}
