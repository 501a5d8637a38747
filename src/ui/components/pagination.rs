//! Pagination bar renderer: `‹ Prev  1 [2] 3  Next ›`.
//!
//! Disabled controls are dimmed, the current page uses the active page colours.

use crate::ui::theme::Theme;
use crate::ui::viewmodel::PaginationInfo;

pub fn render_pagination(out: &mut String, info: &PaginationInfo, theme: &Theme) {
    out.push(' ');
    push_control(out, "‹ Prev", info.prev_enabled, theme);
    out.push(' ');

    for &page in &info.pages {
        out.push(' ');
        if page == info.current_page {
            out.push_str(Theme::bold());
            out.push_str(&Theme::fg(&theme.colors.active_page_fg));
            out.push_str(&Theme::bg(&theme.colors.active_page_bg));
            out.push_str(&format!("[{page}]"));
        } else {
            out.push_str(&Theme::fg(&theme.colors.text_normal));
            out.push_str(&format!(" {page} "));
        }
        out.push_str(Theme::reset());
    }

    out.push_str("  ");
    push_control(out, "Next ›", info.next_enabled, theme);
    out.push('\n');
}

fn push_control(out: &mut String, label: &str, enabled: bool, theme: &Theme) {
    if enabled {
        out.push_str(&Theme::fg(&theme.colors.text_normal));
    } else {
        out.push_str(Theme::dim());
        out.push_str(&Theme::fg(&theme.colors.text_dim));
    }
    out.push_str(label);
    out.push_str(Theme::reset());
}
