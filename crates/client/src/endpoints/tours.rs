//! Tours list endpoint.

use reqwest::Client;
use tracing::debug;

use crate::endpoints::send_request;
use crate::error::{ClientError, Result};
use crate::models::Tour;

/// Fetch the full tour list from `url`.
///
/// Issues a single `GET` with no query parameters and expects a JSON array
/// of tours. Order is preserved exactly as returned.
pub async fn list_tours(client: &Client, url: &str) -> Result<Vec<Tour>> {
    debug!(url, "Fetching tours");

    let response = send_request(client.get(url)).await?;
    let body = response.text().await?;

    let tours: Vec<Tour> = serde_json::from_str(&body)
        .map_err(|e| ClientError::InvalidResponse(format!("Failed to parse tours: {}", e)))?;

    debug!(count = tours.len(), "Fetched tours");
    Ok(tours)
}
