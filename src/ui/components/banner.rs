//! One-line banners above the results: fetch errors and command feedback.

use crate::ui::helpers::truncate;
use crate::ui::theme::Theme;

pub fn render_error_banner(out: &mut String, message: &str, theme: &Theme, cols: usize) {
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.error_fg));
    out.push_str(&truncate(&format!(" ✗ {message}"), cols));
    out.push_str(Theme::reset());
    out.push('\n');
}

/// Notices can be long (`help`) and are wrapped at `|` separators instead of
/// truncated.
pub fn render_notice(out: &mut String, notice: &str, theme: &Theme, cols: usize) {
    out.push_str(&Theme::fg(&theme.colors.notice_fg));
    for line in wrap_at_separators(notice, cols.saturating_sub(1)) {
        out.push(' ');
        out.push_str(&line);
        out.push('\n');
    }
    out.push_str(Theme::reset());
}

fn wrap_at_separators(text: &str, width: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for part in text.split(" | ").map(str::trim) {
        let candidate_len = current.chars().count() + part.chars().count() + 3;
        if !current.is_empty() && candidate_len > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push_str(" | ");
        }
        current.push_str(part);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_on_separators() {
        assert_eq!(wrap_at_separators("a | b | c", 80), vec!["a | b | c"]);
        assert_eq!(wrap_at_separators("aaaa | bbbb | cccc", 10), vec!["aaaa", "bbbb", "cccc"]);
        assert_eq!(wrap_at_separators("plain", 2), vec!["plain"]);
    }
}
