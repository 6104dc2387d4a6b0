//! Tours TUI Library
//!
//! This library provides the application state, fetch controller, runtime
//! plumbing and UI components for the tours terminal user interface.
//!
//! # Example
//!
//! ```rust
//! use tours_tui::{Action, App};
//! use tours_config::Theme;
//!
//! let mut app = App::new(Theme::default(), "https://example.com/tours");
//! assert!(matches!(app.activate(), Some(Action::LoadTours)));
//! assert!(app.activate().is_none());
//! ```

pub mod action;
pub mod app;
pub mod cli;
pub mod fetch;
pub mod runtime;
pub mod ui;

// Re-export commonly used types at the crate root
pub use action::Action;
pub use app::{App, FOOTER_HEIGHT, HEADER_HEIGHT, TOURS_FAILED_MESSAGE};
pub use fetch::{FetchState, FetchView};
