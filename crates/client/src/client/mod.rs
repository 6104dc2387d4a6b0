//! Main tours REST client.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `tours`: [`TourSource`](crate::TourSource) implementation
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Loading/error state for the UI (owned by the TUI's fetch controller)

pub mod builder;
mod tours;

/// Tours REST client.
///
/// Wraps a `reqwest::Client` and the single endpoint URL it reads from.
///
/// # Creating a Client
///
/// ```rust,ignore
/// use tours_client::ToursClient;
///
/// let client = ToursClient::builder()
///     .tours_url("https://www.course-api.com/react-tours-project".to_string())
///     .build()?;
/// let tours = client.list_tours().await?;
/// ```
#[derive(Debug, Clone)]
pub struct ToursClient {
    pub(crate) http: reqwest::Client,
    pub(crate) tours_url: String,
}

impl ToursClient {
    /// Create a new client builder.
    pub fn builder() -> builder::ToursClientBuilder {
        builder::ToursClientBuilder::new()
    }

    /// Create a client from a resolved configuration.
    pub fn from_config(config: &tours_config::Config) -> crate::Result<Self> {
        Self::builder().from_config(config).build()
    }

    /// Get the endpoint URL.
    pub fn tours_url(&self) -> &str {
        &self.tours_url
    }
}
