//! Tour card widget.
//!
//! A card is a bordered box showing, top to bottom: the tour name wrapped in
//! full, the image link, up to two lines of description, and a price row
//! with the booking button. The name is never shortened, so a card grows by
//! one row per extra name line. Other text that does not fit is cut with an
//! ellipsis.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use tours_client::Tour;
use tours_config::Theme;

use crate::ui::text::{display_width, truncate_to_width, wrap_clamped, wrap_words};
use crate::ui::theme::ThemeExt;

/// Rows a card needs besides its name lines, borders included.
pub const CARD_FIXED_ROWS: u16 = 7;

/// Maximum description lines shown on a card.
pub const INFO_LINES: usize = 2;

/// Label of the booking button.
pub const BOOK_BUTTON: &str = "[ Book Now ]";

const IMAGE_MARKER: &str = "▣ ";

fn name_lines(name: &str, inner_width: usize) -> Vec<String> {
    let lines = wrap_words(name, inner_width.max(1));
    if lines.is_empty() {
        vec![String::new()]
    } else {
        lines
    }
}

/// Rows needed to draw the card for `tour` in a cell `card_width` columns wide.
///
/// ```
/// use tours_client::Tour;
/// use tours_tui::ui::widgets::card::{CARD_FIXED_ROWS, card_height};
///
/// let tour = Tour {
///     id: "1".to_string(),
///     name: "Best of Salzburg & Vienna in 8 Days Tour".to_string(),
///     info: String::new(),
///     image: String::new(),
///     price: "2,695".to_string(),
/// };
/// assert_eq!(card_height(&tour, 60), CARD_FIXED_ROWS + 1);
/// assert_eq!(card_height(&tour, 30), CARD_FIXED_ROWS + 2);
/// ```
pub fn card_height(tour: &Tour, card_width: u16) -> u16 {
    let inner_width = usize::from(card_width.saturating_sub(2));
    let rows = name_lines(&tour.name, inner_width).len();
    CARD_FIXED_ROWS.saturating_add(u16::try_from(rows).unwrap_or(u16::MAX))
}

/// A single tour rendered as a card.
pub struct TourCard<'a> {
    tour: &'a Tour,
    theme: &'a Theme,
}

impl<'a> TourCard<'a> {
    pub fn new(tour: &'a Tour, theme: &'a Theme) -> Self {
        Self { tour, theme }
    }

    fn lines(&self, width: usize) -> Vec<Line<'static>> {
        let theme = self.theme;
        let mut lines: Vec<Line<'static>> = name_lines(&self.tour.name, width)
            .into_iter()
            .map(|line| Line::from(Span::styled(line, theme.title())))
            .collect();

        let image_width = width.saturating_sub(display_width(IMAGE_MARKER));
        lines.push(Line::from(vec![
            Span::styled(IMAGE_MARKER, theme.info()),
            Span::styled(
                truncate_to_width(&self.tour.image, image_width),
                theme.text_dim(),
            ),
        ]));

        let mut info = wrap_clamped(&self.tour.info, width, INFO_LINES);
        info.resize(INFO_LINES, String::new());
        lines.extend(
            info.into_iter()
                .map(|line| Line::from(Span::styled(line, theme.text()))),
        );

        lines.push(Line::default());
        lines.push(self.price_row(width));
        lines
    }

    fn price_row(&self, width: usize) -> Line<'static> {
        let price = format!("${}", self.tour.price);
        let used = display_width(&price) + display_width(BOOK_BUTTON);
        let gap = width.saturating_sub(used).max(1);
        Line::from(vec![
            Span::styled(price, self.theme.accent()),
            Span::raw(" ".repeat(gap)),
            Span::styled(BOOK_BUTTON, self.theme.button()),
        ])
    }
}

impl Widget for TourCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border());
        let inner_width = usize::from(block.inner(area).width);
        Paragraph::new(self.lines(inner_width))
            .block(block)
            .render(area, buf);
    }
}
