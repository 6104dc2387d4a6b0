//! Shared UI widgets for common rendering patterns.
//!
//! This module provides reusable widgets for loading, empty and failed
//! states, plus the tour card.

pub mod card;
pub mod empty;
pub mod loading;

pub use card::{CARD_FIXED_ROWS, TourCard, card_height};
pub use empty::{render_empty_state, render_failed_state};
pub use loading::{render_loading, render_loading_state};
