//! Shared rendering utilities.
//!
//! Components build the frame into a `String`; these helpers handle the parts
//! that need care: highlighting by character index, centring, and truncating
//! to the terminal width without splitting a UTF-8 sequence.

use crate::ui::theme::Theme;

/// Number of characters in `text`, used as its display width.
#[must_use]
pub fn text_width(text: &str) -> usize {
    text.chars().count()
}

/// Cuts `text` to at most `max` characters, ending in `…` when cut.
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if text_width(text) <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(max - 1).collect();
    cut.push('…');
    cut
}

/// Pushes `text` centred in `cols` columns, padded on both sides.
pub fn push_centered(out: &mut String, text: &str, cols: usize) {
    let text = truncate(text, cols);
    let len = text_width(&text);
    let left = cols.saturating_sub(len) / 2;

    out.push_str(&" ".repeat(left));
    out.push_str(&text);
    out.push_str(&" ".repeat(cols.saturating_sub(left + len)));
}

/// Pushes a full-width horizontal rule and a newline.
pub fn push_border(out: &mut String, color: &str, cols: usize) {
    out.push_str(&Theme::fg(color));
    out.push_str(&"─".repeat(cols));
    out.push_str(Theme::reset());
    out.push('\n');
}

/// Pushes `text` with the character ranges highlighted.
///
/// Ranges are `(start, end)` character indices with exclusive end, sorted and
/// non-overlapping; parts beyond the text are ignored. After each highlight the
/// `restore` style is re-applied so surrounding text keeps its colour.
pub fn push_highlighted_text(out: &mut String, text: &str, ranges: &[(usize, usize)], theme: &Theme, restore: &str) {
    if ranges.is_empty() {
        out.push_str(text);
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut pos = 0;

    for &(start, end) in ranges {
        let start = start.clamp(pos, chars.len());
        let end = end.clamp(start, chars.len());

        out.extend(&chars[pos..start]);
        if start < end {
            out.push_str(&Theme::fg(&theme.colors.match_highlight_fg));
            out.push_str(&Theme::bg(&theme.colors.match_highlight_bg));
            out.extend(&chars[start..end]);
            out.push_str(Theme::reset());
            out.push_str(restore);
        }
        pos = end;
    }

    out.extend(&chars[pos..]);
}
