//! Composable UI component renderers.
//!
//! Each component appends its lines to the frame being built. The frame layout
//! is fixed:
//!
//! ```text
//! [Header]
//! [Border]
//! [SearchBar - 3 lines]
//! [Notice]              (after a command that produced feedback)
//! [ErrorBanner]         (when the last fetch failed)
//! [Cards | EmptyState]
//! [Pagination]          (more than one page)
//! [Border]
//! [Footer]
//! ```

mod banner;
mod card;
mod empty;
mod footer;
mod header;
mod pagination;
mod search;

use crate::ui::helpers::push_border;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use banner::{render_error_banner, render_notice};
use card::render_cards;
use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use pagination::render_pagination;
use search::render_search_bar;

/// Appends the whole frame for `vm` to `out`.
pub fn render_frame(out: &mut String, vm: &UIViewModel, theme: &Theme, cols: usize) {
    render_header(out, &vm.header, theme, cols);
    push_border(out, &theme.colors.border, cols);
    render_search_bar(out, &vm.search_bar, theme, cols);

    if let Some(notice) = &vm.notice {
        render_notice(out, notice, theme, cols);
    }
    if let Some(error) = &vm.error_banner {
        render_error_banner(out, error, theme, cols);
    }

    out.push('\n');
    if let Some(empty) = &vm.empty_state {
        render_empty_state(out, empty, theme, cols);
    } else {
        render_cards(out, &vm.cards, theme, cols);
    }

    if let Some(pagination) = &vm.pagination {
        render_pagination(out, pagination, theme);
    }

    push_border(out, &theme.colors.border, cols);
    render_footer(out, &vm.footer, theme, cols);
}
