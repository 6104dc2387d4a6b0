//! The retrieval seam consumed by the TUI.
//!
//! Anything that can produce the tour list implements [`TourSource`]: the
//! reqwest-backed [`crate::ToursClient`] in production, in-memory fakes in
//! tests.

use std::future::Future;

use crate::error::Result;
use crate::models::Tour;

/// Source of the ordered tour list.
///
/// Implementations perform exactly one retrieval per call with no retry
/// and no caching. Every failure (transport, non-2xx status, malformed
/// payload) is reported as an `Err`.
pub trait TourSource: Send + Sync {
    fn list_tours(&self) -> impl Future<Output = Result<Vec<Tour>>> + Send;
}
