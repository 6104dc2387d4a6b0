//! Single-attempt request helper.
//!
//! Sends a request exactly once and converts any non-success status into
//! [`ClientError::ApiError`]. Failed requests are not retried.

use reqwest::{RequestBuilder, Response};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{ClientError, Result};

/// Error body shape some tours backends return alongside a failure status.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Sends an HTTP request and rejects non-2xx responses.
///
/// # Errors
///
/// - `ClientError::HttpError` for transport failures.
/// - `ClientError::ApiError` for any non-success status. The message is the
///   `message` field of a JSON error body when present, otherwise the raw body.
pub async fn send_request(builder: RequestBuilder) -> Result<Response> {
    let response = builder.send().await?;
    let status = response.status().as_u16();

    if !ClientError::is_api_error_status(status) {
        debug!(status, url = %response.url(), "Request succeeded");
        return Ok(response);
    }

    let url = response.url().to_string();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    let message = match serde_json::from_str::<ErrorBody>(&body) {
        Ok(parsed) => parsed.message.trim().to_string(),
        Err(_) => body,
    };

    warn!(status, url = %url, "Request failed with non-success status");
    Err(ClientError::ApiError {
        status,
        url,
        message,
    })
}
