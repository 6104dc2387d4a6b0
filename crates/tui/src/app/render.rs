//! Rendering logic for the TUI app.
//!
//! Responsibilities:
//! - Render the main app layout (header, content, footer)
//! - Dispatch to the tours screen renderer
//!
//! Non-responsibilities:
//! - Does NOT handle input
//! - Does NOT mutate app state beyond recording layout for scroll clamping

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, FOOTER_HEIGHT, HEADER_HEIGHT};
use crate::fetch::FetchView;
use crate::ui::screens::tours::{ToursRenderConfig, render_tours};
use crate::ui::theme::ThemeExt;

impl App {
    /// Render the application UI.
    pub fn render(&mut self, f: &mut Frame) {
        self.last_area = f.area();
        let theme = self.theme;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(f.area());

        let header = Paragraph::new(vec![
            Line::from(Span::styled("Our Tours", theme.title())),
            Line::from(Span::styled(self.tours_url.as_str(), theme.text_dim())),
        ])
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(theme.border()),
        );
        f.render_widget(header, chunks[0]);

        let view = self.tours.view();
        let count = match view {
            FetchView::Ready(tours) => Some(tours.len()),
            _ => None,
        };

        let grid = render_tours(
            f,
            chunks[1],
            ToursRenderConfig {
                view,
                scroll_row: self.scroll_row,
                theme: &theme,
                spinner_frame: self.spinner_frame,
            },
        );
        self.max_scroll_row = grid.map_or(0, |g| g.max_scroll());
        self.scroll_row = self.scroll_row.min(self.max_scroll_row);

        let mut footer = vec![
            Span::styled(" q", theme.accent()),
            Span::styled(" quit  ", theme.text_dim()),
            Span::styled("↑/↓", theme.accent()),
            Span::styled(" scroll", theme.text_dim()),
        ];
        if let Some(count) = count {
            let noun = if count == 1 { "tour" } else { "tours" };
            footer.push(Span::styled(format!("  {count} {noun}"), theme.text()));
        }
        f.render_widget(Paragraph::new(Line::from(footer)), chunks[2]);
    }
}
