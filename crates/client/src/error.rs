//! Error types for the tours client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur while retrieving tours.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport-level failure (connect, TLS, body read, timeout).
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Non-success status returned by the tours endpoint.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// Response body was not a JSON array of tours.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// Check if an HTTP status code is reported as an API error.
    ///
    /// Every non-2xx status is a failure; informational and redirect codes
    /// that reach this point (redirect limit exhausted) count too.
    pub fn is_api_error_status(status: u16) -> bool {
        !(200..300).contains(&status)
    }

    /// HTTP status carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            Self::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
