//! Tours screen rendering.
//!
//! Renders exactly one of: the loading indicator, the failure message, or
//! the responsive grid of tour cards. The grid uses one column on narrow
//! terminals, two on medium and three on wide ones, and scrolls by whole
//! card rows. All cards share the height of the tallest one, so a long
//! tour name grows every row of the grid rather than being shortened.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{Block, Borders},
};
use tours_client::Tour;
use tours_config::Theme;

use crate::fetch::FetchView;
use crate::ui::theme::ThemeExt;
use crate::ui::widgets::{
    CARD_FIXED_ROWS, TourCard, card_height, render_empty_state, render_failed_state,
    render_loading,
};

const TITLE: &str = "Tours";

/// Widths below this use a single column.
pub const NARROW_WIDTH: u16 = 60;
/// Widths below this (and at least `NARROW_WIDTH`) use two columns.
pub const MEDIUM_WIDTH: u16 = 100;

/// Number of card columns for an area of the given width.
pub fn columns_for_width(width: u16) -> usize {
    if width < NARROW_WIDTH {
        1
    } else if width < MEDIUM_WIDTH {
        2
    } else {
        3
    }
}

/// Geometry of the card grid for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridLayout {
    pub columns: usize,
    pub card_height: u16,
    pub visible_rows: usize,
    pub total_rows: usize,
}

impl GridLayout {
    /// Lay out `count` cards of `card_height` rows inside `inner`.
    pub fn compute(inner: Rect, count: usize, card_height: u16) -> Self {
        let columns = columns_for_width(inner.width);
        let card_height = card_height.max(1);
        Self {
            columns,
            card_height,
            visible_rows: usize::from((inner.height / card_height).max(1)),
            total_rows: count.div_ceil(columns),
        }
    }

    /// Lay out `tours`, sizing every card for the tallest name.
    pub fn for_tours(inner: Rect, tours: &[Tour]) -> Self {
        let columns = columns_for_width(inner.width);
        let card_width = inner.width / columns as u16;
        let height = tours
            .iter()
            .map(|tour| card_height(tour, card_width))
            .max()
            .unwrap_or(CARD_FIXED_ROWS);
        Self::compute(inner, tours.len(), height)
    }

    /// Largest valid first-visible row.
    pub fn max_scroll(&self) -> usize {
        self.total_rows.saturating_sub(self.visible_rows)
    }
}

/// Configuration for rendering the tours screen.
pub struct ToursRenderConfig<'a> {
    /// Reduced fetch state to draw
    pub view: FetchView<'a, Tour>,
    /// First visible card row
    pub scroll_row: usize,
    /// Theme for consistent styling.
    pub theme: &'a Theme,
    /// Current spinner frame for loading animation.
    pub spinner_frame: u8,
}

/// Render the tours screen.
///
/// Returns the grid geometry when cards were drawn, so the caller can clamp
/// its scroll position.
pub fn render_tours(f: &mut Frame, area: Rect, config: ToursRenderConfig) -> Option<GridLayout> {
    let ToursRenderConfig {
        view,
        scroll_row,
        theme,
        spinner_frame,
    } = config;

    match view {
        FetchView::Loading => {
            render_loading(f, area, TITLE, spinner_frame, theme);
            None
        }
        FetchView::Failed(message) => {
            render_failed_state(f, area, TITLE, message, theme);
            None
        }
        FetchView::Ready([]) => {
            render_empty_state(f, area, TITLE, "No tours to show", theme);
            None
        }
        FetchView::Ready(tours) => Some(render_grid(f, area, tours, scroll_row, theme)),
    }
}

fn render_grid(
    f: &mut Frame,
    area: Rect,
    tours: &[Tour],
    scroll_row: usize,
    theme: &Theme,
) -> GridLayout {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border())
        .title(TITLE);
    let inner = block.inner(area);
    let layout = GridLayout::for_tours(inner, tours);
    let first_row = scroll_row.min(layout.max_scroll());

    if layout.total_rows > layout.visible_rows {
        let first = first_row * layout.columns + 1;
        let last = ((first_row + layout.visible_rows) * layout.columns).min(tours.len());
        block = block.title_bottom(
            Line::styled(format!(" {first}-{last} of {} ", tours.len()), theme.text_dim())
                .right_aligned(),
        );
    }
    f.render_widget(block, area);

    let column_constraints = vec![Constraint::Ratio(1, layout.columns as u32); layout.columns];
    for visible in 0..layout.visible_rows {
        let offset = u16::try_from(visible)
            .unwrap_or(u16::MAX)
            .saturating_mul(layout.card_height);
        if offset >= inner.height {
            break;
        }
        let row_area = Rect {
            y: inner.y + offset,
            height: layout.card_height.min(inner.height - offset),
            ..inner
        };
        let cells = Layout::horizontal(column_constraints.clone()).split(row_area);

        let row_start = (first_row + visible) * layout.columns;
        for (cell, tour) in cells.iter().zip(tours.iter().skip(row_start).take(layout.columns)) {
            f.render_widget(TourCard::new(tour, theme), *cell);
        }
    }

    layout
}
