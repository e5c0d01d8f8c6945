//! Error types for mentora-core

use thiserror::Error;

/// Main error type for the mentora-core library
#[derive(Error, Debug)]
pub enum Error {
    /// The collaborator answered with a non-2xx status.
    ///
    /// `message` carries the structured `detail` field from the error body
    /// when the server sent one, otherwise the raw body text.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Network-level failure (connect, timeout, malformed response)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// True for a structured server-side error, false for a network-level
    /// failure. Only affects how the failure is logged and displayed;
    /// callers handle both identically.
    pub fn is_server_error(&self) -> bool {
        matches!(self, Error::Api { .. })
    }
}

/// Result type alias for mentora-core
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = Error::Api {
            status: 401,
            message: "Unauthorized".to_string(),
        };
        assert_eq!(err.to_string(), "API error (401): Unauthorized");
        assert!(err.is_server_error());
    }

    #[test]
    fn test_config_error_is_not_server_error() {
        let err = Error::Config("api.base_url is required".to_string());
        assert!(!err.is_server_error());
    }
}
