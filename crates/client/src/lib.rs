//! Tours REST client.
//!
//! This crate provides a type-safe client for the tours endpoint: the
//! [`Tour`] record model, the [`TourSource`] seam consumed by the TUI, and
//! [`ToursClient`], its reqwest-backed implementation.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod source;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use client::ToursClient;
pub use client::builder::ToursClientBuilder;
pub use error::{ClientError, Result};
pub use models::Tour;
pub use source::TourSource;
