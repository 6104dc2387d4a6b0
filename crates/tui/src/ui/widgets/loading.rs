//! Loading state widget for TUI screens.
//!
//! Provides a consistent loading indicator with animated spinner.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    widgets::{Block, Borders, Paragraph},
};
use tours_config::Theme;

use crate::ui::theme::{ThemeExt, spinner_char};

/// Render a loading state widget with spinner animation.
///
/// # Arguments
///
/// * `f` - The frame to render to
/// * `area` - The area to render within
/// * `title` - The title for the widget border (e.g., "Tours")
/// * `message` - The loading message to display (e.g., "Loading...")
/// * `spinner_frame` - The current spinner animation frame
/// * `theme` - The theme for styling
pub fn render_loading_state(
    f: &mut Frame,
    area: Rect,
    title: &str,
    message: &str,
    spinner_frame: u8,
    theme: &Theme,
) {
    let spinner = spinner_char(spinner_frame);
    let loading_widget = Paragraph::new(format!("{} {}", spinner, message))
        .style(theme.info())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border())
                .title(title),
        )
        .alignment(Alignment::Center);
    f.render_widget(loading_widget, area);
}

/// Render the standard "Loading..." indicator.
///
/// ```rust,ignore
/// render_loading(f, area, "Tours", spinner_frame, theme);
/// // Displays: "⠋ Loading..."
/// ```
pub fn render_loading(f: &mut Frame, area: Rect, title: &str, spinner_frame: u8, theme: &Theme) {
    render_loading_state(f, area, title, "Loading...", spinner_frame, theme);
}
