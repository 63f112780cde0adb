//! Error types for the `CivicPulse` client

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the `CivicPulse` client
///
/// The pages never branch on the variant: every failure is either logged or
/// collapsed into one generic user-facing message. The variants exist so the
/// log line says what actually went wrong.
#[derive(Error, Debug)]
pub enum Error {
    /// The request never produced a response (network, CORS, DNS)
    #[error("HTTP request failed: {message}")]
    Http {
        /// Error message
        message: String,
    },

    /// The backend answered with a non-2xx status
    #[error("API returned {status} for {url}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Requested URL
        url: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Error message
        message: String,
    },

    /// Browser storage unavailable or rejected the write
    #[error("Storage error: {message}")]
    Storage {
        /// Error message
        message: String,
    },
}

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        Self::Configuration {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::error::Error as StdError;

    #[test]
    fn test_http_error() {
        let error = Error::Http {
            message: "connection refused".to_string(),
        };
        assert_eq!(error.to_string(), "HTTP request failed: connection refused");
    }

    #[test]
    fn test_status_error() {
        let error = Error::Status {
            status: 503,
            url: "http://localhost:8000/issues/".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "API returned 503 for http://localhost:8000/issues/"
        );
    }

    #[test]
    fn test_serialization_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let error = Error::from(json_error);

        assert!(matches!(error, Error::Serialization(_)));
        assert!(error.to_string().starts_with("Serialization error"));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_config_error_conversion() {
        let error = Error::from(config::ConfigError::Message("bad key".to_string()));
        assert_eq!(error.to_string(), "Configuration error: bad key");
    }

    #[test]
    fn test_storage_error() {
        let error = Error::Storage {
            message: "localStorage unavailable".to_string(),
        };
        assert_eq!(error.to_string(), "Storage error: localStorage unavailable");
        assert!(error.source().is_none());
    }
}
