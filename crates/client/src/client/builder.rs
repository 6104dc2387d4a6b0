//! Client builder for constructing [`ToursClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating the required tours URL
//! - Configuring the underlying HTTP client (optional timeout, redirects)
//!
//! # Invariants
//! - `tours_url` is required and must use the http or https scheme
//! - No timeout is applied unless one is set explicitly or via [`Config`]

use std::time::Duration;

use crate::client::ToursClient;
use crate::error::{ClientError, Result};
use tours_config::{Config, constants::DEFAULT_MAX_REDIRECTS};

/// Builder for creating a new [`ToursClient`].
///
/// # Example
///
/// ```rust,ignore
/// use tours_client::ToursClient;
///
/// let client = ToursClient::builder()
///     .tours_url("https://www.course-api.com/react-tours-project".to_string())
///     .timeout(Some(Duration::from_secs(10)))
///     .build()?;
/// ```
#[derive(Debug, Default)]
pub struct ToursClientBuilder {
    tours_url: Option<String>,
    timeout: Option<Duration>,
}

impl ToursClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the endpoint returning the tour list.
    pub fn tours_url(mut self, url: String) -> Self {
        self.tours_url = Some(url);
        self
    }

    /// Set the request timeout. `None` leaves requests unbounded.
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Populate the builder from a resolved [`Config`].
    pub fn from_config(mut self, config: &Config) -> Self {
        self.tours_url = Some(config.tours_url.clone());
        self.timeout = config.timeout;
        self
    }

    /// Build the [`ToursClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `tours_url` was not provided or is not http(s).
    /// Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<ToursClient> {
        let tours_url = self
            .tours_url
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .ok_or_else(|| ClientError::InvalidUrl("tours_url is required".to_string()))?;

        let parsed = url::Url::parse(&tours_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{tours_url}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ClientError::InvalidUrl(format!(
                "{tours_url} (expected http:// or https://)"
            )));
        }

        let mut http_builder = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS));
        if let Some(timeout) = self.timeout {
            http_builder = http_builder.timeout(timeout);
        }
        let http = http_builder.build()?;

        Ok(ToursClient { http, tours_url })
    }
}
