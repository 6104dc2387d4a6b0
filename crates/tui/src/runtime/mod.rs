//! Runtime components for the TUI application.
//!
//! This module contains the runtime infrastructure for the TUI:
//! - Terminal management (TerminalGuard)
//! - Configuration loading from CLI, environment and `.env`
//! - The terminal input task
//! - Async side effect handlers for the tours retrieval
//!
//! Does NOT handle:
//! - UI rendering or input handling (see `tours_tui::app` and `tours_tui::ui`).
//! - HTTP details (see `tours_client`).
//!
//! Invariants:
//! - Side effects run in separate tokio tasks to avoid blocking the UI.

pub mod config;
pub mod input;
pub mod side_effects;
pub mod terminal;
