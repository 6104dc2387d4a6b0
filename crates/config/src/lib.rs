//! Configuration management for Tours TUI.
//!
//! This crate provides types and loaders for resolving the tours endpoint,
//! request timeout and color theme from `.env` files, environment variables
//! and explicit overrides.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{ColorTheme, Config, Theme};
