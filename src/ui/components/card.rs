//! Recipe card component renderer.
//!
//! ```text
//!  1. Roast Chicken With Lemon
//!     Crisp skin and a bright pan sauce.
//!     ⭐ 4.4   Calories: 620   Fat: 38 g   Protein: 55 g   Sodium: 890 mg
//!     Categories: Chicken, Roast, Dinner
//!     [View Details]
//! ```
//!
//! Expanded cards add ingredients as bullets and directions as numbered steps,
//! and the marker reads `[Hide Details]`.

use crate::ui::helpers::{self, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{RecipeCard, RecipeDetails};

/// Indent of every card line after the title.
const INDENT: &str = "    ";

pub fn render_cards(out: &mut String, cards: &[RecipeCard], theme: &Theme, cols: usize) {
    for card in cards {
        render_card(out, card, theme, cols);
        out.push('\n');
    }
}

fn render_card(out: &mut String, card: &RecipeCard, theme: &Theme, cols: usize) {
    let body_width = cols.saturating_sub(INDENT.len());

    // Title keeps its full text so highlight indices stay valid.
    let title_style = format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.title_fg));
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str(&format!("{:>2}. ", card.position));
    out.push_str(&title_style);
    helpers::push_highlighted_text(out, &card.title, &card.highlight_ranges, theme, &title_style);
    out.push_str(Theme::reset());
    out.push('\n');

    if !card.description.is_empty() {
        push_line(out, &Theme::fg(&theme.colors.text_dim), &truncate(&card.description, body_width));
    }

    out.push_str(INDENT);
    out.push_str(&Theme::fg(&theme.colors.rating_fg));
    out.push_str(&format!("⭐ {}", card.rating));
    out.push_str(&Theme::fg(&theme.colors.text_normal));
    out.push_str(&format!(
        "   Calories: {}   Fat: {} g   Protein: {} g   Sodium: {} mg",
        card.calories, card.fat, card.protein, card.sodium
    ));
    out.push_str(Theme::reset());
    out.push('\n');

    if !card.categories.is_empty() {
        push_line(
            out,
            &Theme::fg(&theme.colors.text_normal),
            &truncate(&format!("Categories: {}", card.categories), body_width),
        );
    }

    let marker = if card.details.is_some() { "[Hide Details]" } else { "[View Details]" };
    push_line(out, &Theme::fg(&theme.colors.search_bar_border), marker);

    if let Some(details) = &card.details {
        render_details(out, details, theme, body_width);
    }
}

fn render_details(out: &mut String, details: &RecipeDetails, theme: &Theme, width: usize) {
    let heading = format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.text_normal));
    let body = Theme::fg(&theme.colors.text_normal);

    push_line(out, &heading, "Ingredients:");
    if details.ingredients.is_empty() {
        push_line(out, &Theme::fg(&theme.colors.text_dim), "  (none listed)");
    }
    for ingredient in &details.ingredients {
        push_line(out, &body, &truncate(&format!("  • {ingredient}"), width));
    }

    push_line(out, &heading, "Directions:");
    if details.directions.is_empty() {
        push_line(out, &Theme::fg(&theme.colors.text_dim), "  (none listed)");
    }
    for (step, direction) in details.directions.iter().enumerate() {
        push_line(out, &body, &format!("  {}. {direction}", step + 1));
    }
}

fn push_line(out: &mut String, style: &str, text: &str) {
    out.push_str(INDENT);
    out.push_str(style);
    out.push_str(text);
    out.push_str(Theme::reset());
    out.push('\n');
}
