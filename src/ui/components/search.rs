//! Search bar component renderer.
//!
//! A three-line box showing the submitted term, the fetch status and, when any
//! are active, the filters:
//!
//! ```text
//!   ┌──────────────────────────────────────────────┐
//!   │ Search: chicken  [succeeded]  category=Vegan │
//!   └──────────────────────────────────────────────┘
//! ```

use crate::ui::helpers::{text_width, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin on each side of the box.
const SEARCH_BOX_MARGIN: usize = 2;

pub fn render_search_bar(out: &mut String, search: &SearchBarInfo, theme: &Theme, cols: usize) {
    let inner_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2 + 2);
    let margin = " ".repeat(SEARCH_BOX_MARGIN);
    let border = Theme::fg(&theme.colors.search_bar_border);

    let mut text = format!(" Search: {}  [{}]", search.query, search.status);
    if !search.filters.is_empty() {
        text.push_str("  ");
        text.push_str(&search.filters);
    }
    let text = truncate(&text, inner_width);
    let padding = inner_width.saturating_sub(text_width(&text));

    out.push_str(&format!("{margin}{border}┌{}┐{}\n", "─".repeat(inner_width), Theme::reset()));
    out.push_str(&format!(
        "{margin}{border}│{}{text}{}{border}│{}\n",
        Theme::fg(&theme.colors.text_normal),
        " ".repeat(padding),
        Theme::reset()
    ));
    out.push_str(&format!("{margin}{border}└{}┘{}\n", "─".repeat(inner_width), Theme::reset()));
}
