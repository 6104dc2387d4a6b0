//! Application state and rendering.
//!
//! The module is organized into submodules:
//! - `input`: Keyboard and mouse translation into actions
//! - `render`: Header, tours screen and footer rendering
//!
//! Invariants:
//! - The tours retrieval is requested at most once per `App` (see `activate`).
//! - The scroll position never exceeds the last rendered grid's maximum.

mod input;
mod render;

use ratatui::layout::Rect;
use tours_client::Tour;
use tours_config::Theme;

use crate::action::Action;
use crate::fetch::FetchState;

/// Rows used by the header.
pub const HEADER_HEIGHT: u16 = 3;
/// Rows used by the footer.
pub const FOOTER_HEIGHT: u16 = 1;

/// Message shown when the tours retrieval fails.
pub const TOURS_FAILED_MESSAGE: &str = "error fetching tours";

/// Main application state.
pub struct App {
    /// Tours list and its retrieval state
    pub tours: FetchState<Tour>,
    /// Runtime colors
    pub theme: Theme,
    /// Endpoint shown in the header
    pub tours_url: String,
    /// Spinner animation frame, advanced on every tick
    pub spinner_frame: u8,
    /// First visible card row
    pub scroll_row: usize,
    /// Largest scroll row from the most recent render
    pub(crate) max_scroll_row: usize,
    /// Terminal area from the most recent render
    pub last_area: Rect,
}

impl App {
    /// Create a new app for the given theme and endpoint.
    pub fn new(theme: Theme, tours_url: impl Into<String>) -> Self {
        Self {
            tours: FetchState::new(TOURS_FAILED_MESSAGE),
            theme,
            tours_url: tours_url.into(),
            spinner_frame: 0,
            scroll_row: 0,
            max_scroll_row: 0,
            last_area: Rect::default(),
        }
    }

    /// Activate the tours screen.
    ///
    /// Returns `Some(Action::LoadTours)` the first time only; the fetch
    /// state is already loading when it returns. The caller hands the
    /// action to the side-effect handler.
    pub fn activate(&mut self) -> Option<Action> {
        if self.tours.activate() {
            tracing::info!(url = %self.tours_url, "Tours screen activated");
            Some(Action::LoadTours)
        } else {
            None
        }
    }

    /// Apply an action to the application state.
    pub fn update(&mut self, action: Action) {
        match action {
            Action::Tick => {
                self.spinner_frame = self.spinner_frame.wrapping_add(1);
            }
            Action::ToursLoaded(result) => {
                self.tours.resolve(result);
                self.scroll_row = 0;
            }
            Action::ScrollDown => {
                self.scroll_row = (self.scroll_row + 1).min(self.max_scroll_row);
            }
            Action::ScrollUp => {
                self.scroll_row = self.scroll_row.saturating_sub(1);
            }
            Action::Resize(width, height) => {
                tracing::debug!(width, height, "Terminal resized");
            }
            Action::LoadTours
            | Action::Quit
            | Action::Input(_)
            | Action::Mouse(_) => {}
        }
    }
}
