//! Width-aware text fitting for fixed-size cells.
//!
//! Widths are measured in terminal columns (via `unicode-width`), not bytes
//! or chars. Every returned line fits within the requested width. Wrapping
//! is delegated to `textwrap`.

use std::borrow::Cow;

use textwrap::{Options, WordSeparator, WrapAlgorithm};
use unicode_width::UnicodeWidthChar;

/// Marker appended to text that was cut short.
pub const ELLIPSIS: char = '…';

fn char_width(ch: char) -> usize {
    ch.width().unwrap_or(0)
}

/// Display width of `text` in terminal columns.
pub fn display_width(text: &str) -> usize {
    text.chars().map(char_width).sum()
}

/// Cut `text` to at most `width` columns, ending in [`ELLIPSIS`] when cut.
///
/// ```
/// use tours_tui::ui::text::truncate_to_width;
///
/// assert_eq!(truncate_to_width("Best of Paris", 8), "Best of…");
/// assert_eq!(truncate_to_width("Rome", 8), "Rome");
/// ```
pub fn truncate_to_width(text: &str, width: usize) -> String {
    if display_width(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let budget = width - char_width(ELLIPSIS);
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = char_width(ch);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push(ELLIPSIS);
    out
}

/// Greedy word wrap. Words wider than `width` are split across lines.
///
/// Runs of whitespace collapse to single spaces first. A character wider
/// than `width` itself is placed alone on a line, so the width bound only
/// holds for `width >= 2`.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if width == 0 || normalized.is_empty() {
        return Vec::new();
    }

    let options = Options::new(width)
        .word_separator(WordSeparator::AsciiSpace)
        .wrap_algorithm(WrapAlgorithm::FirstFit);
    textwrap::wrap(&normalized, options)
        .into_iter()
        .map(Cow::into_owned)
        .collect()
}

/// Wrap `text` to `width` and keep at most `max_lines` lines.
///
/// When lines are dropped, the last kept line ends in [`ELLIPSIS`].
pub fn wrap_clamped(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    if max_lines == 0 {
        return Vec::new();
    }

    let mut lines = wrap_words(text, width);
    if lines.len() <= max_lines {
        return lines;
    }

    lines.truncate(max_lines);
    if let Some(last) = lines.last_mut() {
        let marked = format!("{last}{ELLIPSIS}");
        *last = truncate_to_width(&marked, width);
    }
    lines
}
