//! Centralized constants for the Tours TUI workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication and improve maintainability.

// =============================================================================
// Endpoint & Timeout Defaults
// =============================================================================

/// Default endpoint serving the JSON array of tours.
pub const DEFAULT_TOURS_URL: &str = "https://www.course-api.com/react-tours-project";

/// Maximum allowed request timeout in seconds (1 hour).
///
/// No timeout is applied unless one is configured.
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// TUI/UI Defaults
// =============================================================================

/// Default channel capacity for action messages.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// Default UI tick interval for animations in milliseconds.
pub const DEFAULT_UI_TICK_MS: u64 = 250;

/// Default directory for log files, relative to the working directory.
pub const DEFAULT_LOG_DIR: &str = "logs";
