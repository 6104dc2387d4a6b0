//! Async side effect handlers for TUI actions.
//!
//! Responsibilities:
//! - Perform the tours retrieval triggered by `Action::LoadTours`.
//! - Spawn background tasks so the UI loop never waits on the network.
//! - Send results back via the action channel for state updates.
//!
//! Does NOT handle:
//! - Direct application state modification (sends actions to do that).
//! - UI rendering or terminal management.
//!
//! Invariants:
//! - Every retrieval runs in a task tracked by the shared `TaskTracker`.
//! - Every retrieval answers with exactly one result action, including when
//!   the retrieval itself panics.
//! - A result that arrives after the receiver is gone is dropped silently.

mod dispatcher;
mod tours;

pub use dispatcher::handle_side_effects;
pub use tokio_util::task::TaskTracker;

use std::sync::Arc;

/// Shared tour source handed to spawned tasks.
pub type SharedSource<S> = Arc<S>;
