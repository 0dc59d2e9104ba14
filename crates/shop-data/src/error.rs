//! Data access error types.

use thiserror::Error;

/// Errors that can occur when reading catalog data.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Failed to send the request.
    #[error("Request failed: {0}")]
    RequestError(String),

    /// HTTP error response.
    #[error("HTTP {status}: {message}")]
    HttpError { status: u16, message: String },

    /// Failed to parse a response body.
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Backend not configured.
    #[error("Backend not configured: {0}")]
    NotConfigured(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::ParseError(e.to_string())
    }
}
