//! Configuration type definitions for Tours TUI.
//!
//! Responsibilities:
//! - Define the resolved runtime `Config`.
//! - Define the user-selectable `ColorTheme` and its expanded `Theme`.
//!
//! Does NOT handle:
//! - Configuration loading from files or environment variables (see `loader` module).
//! - Actual network requests (see client crate).

mod theme;

use std::time::Duration;

pub use theme::{ColorTheme, Theme};

/// Fully resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Endpoint returning the JSON array of tours.
    pub tours_url: String,
    /// Optional request timeout. `None` means the request may hang indefinitely.
    pub timeout: Option<Duration>,
    /// Selected color theme.
    pub theme: ColorTheme,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tours_url: crate::constants::DEFAULT_TOURS_URL.to_string(),
            timeout: None,
            theme: ColorTheme::default(),
        }
    }
}
