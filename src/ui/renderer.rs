//! Top-level rendering coordinator.
//!
//! Rendering is two steps: [`AppState::compute_viewmodel`] decides what to
//! show, [`render_viewmodel`] turns it into ANSI-styled text. The caller writes
//! the frame to the terminal; nothing here touches stdout.
//!
//! # Example
//!
//! ```rust
//! use epicurious::app::AppState;
//! use epicurious::ui::{render, Theme};
//!
//! let state = AppState::new(6, Theme::default());
//! let frame = render(&state, 80);
//! assert!(frame.contains("No recipes found."));
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Narrowest layout the components are laid out for.
pub const MIN_COLS: usize = 40;

/// Renders the current frame for a terminal `cols` columns wide.
#[must_use]
pub fn render(state: &AppState, cols: usize) -> String {
    let _span = tracing::trace_span!("render", cols).entered();
    let viewmodel = state.compute_viewmodel();
    render_viewmodel(&viewmodel, &state.theme, cols)
}

/// Renders a precomputed view model.
#[must_use]
pub fn render_viewmodel(vm: &UIViewModel, theme: &Theme, cols: usize) -> String {
    let mut out = String::new();
    components::render_frame(&mut out, vm, theme, cols.max(MIN_COLS));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Recipe, RecipeId};

    /// Drops CSI sequences so assertions can look at the visible text.
    fn visible(frame: &str) -> String {
        let mut out = String::new();
        let mut chars = frame.chars();
        while let Some(c) = chars.next() {
            if c == '\u{1b}' {
                for c in chars.by_ref() {
                    if c.is_ascii_alphabetic() {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    fn loaded(count: usize) -> AppState {
        let mut state = AppState::new(6, Theme::default());
        state.search_term = "chicken".into();
        state.set_raw_results(
            (1..=count)
                .map(|i| {
                    let mut r = Recipe::new(format!("{i}"), format!("Chicken Dish {i}"));
                    r.rating = Some(4.5);
                    r.calories = Some(400.0);
                    r.categories = vec!["Dinner".into(), "Poultry".into()];
                    r.ingredients = vec!["1 chicken".into(), "salt".into()];
                    r.directions = vec!["Season.".into(), "Roast.".into()];
                    r
                })
                .collect(),
        );
        state.apply_filters();
        state
    }

    #[test]
    fn idle_frame_shows_empty_state_without_pagination() {
        let frame = visible(&render(&AppState::new(6, Theme::default()), 80));

        assert!(frame.contains("No recipes found."));
        assert!(frame.contains("Search:"));
        assert!(!frame.contains("Prev"));
    }

    #[test]
    fn first_page_lists_six_cards_and_pagination() {
        let frame = visible(&render(&loaded(7), 100));

        for i in 1..=6 {
            assert!(frame.contains(&format!("Chicken Dish {i}\n")), "missing card {i}");
        }
        assert!(!frame.contains("Chicken Dish 7"));
        assert!(frame.contains("⭐ 4.5"));
        assert!(frame.contains("Calories: 400"));
        assert!(frame.contains("Categories: Dinner, Poultry"));
        assert!(frame.contains("‹ Prev"));
        assert!(frame.contains("[1]"));
        assert!(frame.contains("Next ›"));
    }

    #[test]
    fn expanded_card_lists_ingredients_and_steps() {
        let mut state = loaded(2);
        state.toggle_details(&RecipeId::new("2"));
        let frame = visible(&render(&state, 80));

        assert_eq!(frame.matches("[Hide Details]").count(), 1);
        assert_eq!(frame.matches("[View Details]").count(), 1);
        assert!(frame.contains("• 1 chicken"));
        assert!(frame.contains("1. Season."));
        assert!(frame.contains("2. Roast."));
    }

    #[test]
    fn failed_fetch_keeps_cards_under_error_banner() {
        let mut state = loaded(3);
        state.begin_fetch();
        state.fail_fetch("HTTP error! status: 500".into());
        let frame = visible(&render(&state, 80));

        assert!(frame.contains("Search failed: HTTP error! status: 500"));
        assert!(frame.contains("Chicken Dish 1"));
        assert!(frame.contains("[failed]"));
    }

    #[test]
    fn narrow_terminals_use_minimum_width() {
        let frame = visible(&render(&AppState::new(6, Theme::default()), 5));
        let border = "─".repeat(MIN_COLS);
        assert!(frame.lines().any(|line| line == border));
    }
}
