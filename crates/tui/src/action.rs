//! Action protocol for the Tours TUI.
//!
//! Responsibilities:
//! - Define the unified `Action` enum used for all communication between the
//!   input handler, the app state and the async side-effect handlers.
//!
//! Does NOT handle:
//! - Executing side effects (see `runtime::side_effects`).
//! - Mutating state (see `App::update`).
//!
//! Invariants:
//! - `LoadTours` is only produced by `App::activate`, so at most one
//!   retrieval is issued per activation.
//! - Every `LoadTours` is answered by exactly one `ToursLoaded`.

use crossterm::event::{KeyEvent, MouseEvent};
use tours_client::Tour;

/// Unified action type for the Tours TUI.
#[derive(Debug, Clone)]
pub enum Action {
    /// Quit the application.
    Quit,
    /// Raw keyboard input, translated by `App::handle_input`.
    Input(KeyEvent),
    /// Raw mouse input, translated by `App::handle_mouse`.
    Mouse(MouseEvent),
    /// Terminal resized.
    Resize(u16, u16),
    /// Animation tick.
    Tick,
    /// Issue the single tours retrieval for this activation.
    LoadTours,
    /// Outcome of the tours retrieval. The error carries transport detail
    /// for logging only.
    ToursLoaded(Result<Vec<Tour>, String>),
    /// Scroll the card grid down one row.
    ScrollDown,
    /// Scroll the card grid up one row.
    ScrollUp,
}

impl Action {
    /// Stable, payload-free name used in tracing spans.
    pub fn type_name(&self) -> &'static str {
        match self {
            Action::Quit => "Quit",
            Action::Input(_) => "Input",
            Action::Mouse(_) => "Mouse",
            Action::Resize(..) => "Resize",
            Action::Tick => "Tick",
            Action::LoadTours => "LoadTours",
            Action::ToursLoaded(_) => "ToursLoaded",
            Action::ScrollDown => "ScrollDown",
            Action::ScrollUp => "ScrollUp",
        }
    }
}
