//! Placeholder widgets for screens without cards to show.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use tours_config::Theme;

use crate::ui::theme::ThemeExt;

/// Render an empty state widget.
///
/// ```rust,ignore
/// render_empty_state(f, area, "Tours", "No tours to show", theme);
/// ```
pub fn render_empty_state(f: &mut Frame, area: Rect, title: &str, message: &str, theme: &Theme) {
    let placeholder = Paragraph::new(message)
        .style(theme.text_dim())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border())
                .title(title),
        )
        .alignment(Alignment::Center);
    f.render_widget(placeholder, area);
}

/// Render a failed retrieval. Only the human-readable message is shown.
pub fn render_failed_state(f: &mut Frame, area: Rect, title: &str, message: &str, theme: &Theme) {
    let failed = Paragraph::new(message)
        .style(theme.error())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.error())
                .title(title),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(failed, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_render_empty_state() {
        let mut terminal = Terminal::new(TestBackend::new(60, 10)).unwrap();
        let theme = Theme::default();

        terminal
            .draw(|f| render_empty_state(f, f.area(), "Tours", "No tours to show", &theme))
            .unwrap();

        let content = buffer_text(&terminal);
        assert!(content.contains("Tours"));
        assert!(content.contains("No tours to show"));
    }

    #[test]
    fn test_render_failed_state() {
        let mut terminal = Terminal::new(TestBackend::new(60, 10)).unwrap();
        let theme = Theme::default();

        terminal
            .draw(|f| render_failed_state(f, f.area(), "Tours", "error fetching tours", &theme))
            .unwrap();

        let content = buffer_text(&terminal);
        assert!(content.contains("error fetching tours"));
    }
}
