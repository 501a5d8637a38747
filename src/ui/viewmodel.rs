//! View model types representing renderable UI state.
//!
//! View models are computed from state via `AppState::compute_viewmodel()` and
//! consumed by the renderer. They contain no business logic, only display-ready
//! data: every number is already formatted and every optional UI element is
//! already decided.
//!
//! # Example
//!
//! ```rust
//! use epicurious::app::AppState;
//! use epicurious::ui::Theme;
//!
//! let state = AppState::new(6, Theme::default());
//! let vm = state.compute_viewmodel();
//! assert_eq!(vm.current_page, 1);
//! assert_eq!(vm.total_pages, 1);
//! assert!(vm.cards.is_empty());
//! assert!(vm.pagination.is_none());
//! ```

use crate::app::FetchStatus;
use crate::domain::RecipeId;

/// Complete UI view model for one render cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct UIViewModel {
    /// Outcome of the last search attempt.
    pub status: FetchStatus,

    /// Recipe cards on the current page, in result order.
    pub cards: Vec<RecipeCard>,

    /// 1-based page being displayed, always within `1..=total_pages`.
    pub current_page: usize,

    /// Total page count, at least 1.
    pub total_pages: usize,

    /// Recipe whose details are expanded, if any.
    pub expanded_recipe_id: Option<RecipeId>,

    /// Title bar.
    pub header: HeaderInfo,

    /// Current search term and filter summary.
    pub search_bar: SearchBarInfo,

    /// Pagination controls, only present when there is more than one page.
    pub pagination: Option<PaginationInfo>,

    /// Shown instead of cards when nothing can be displayed.
    pub empty_state: Option<EmptyState>,

    /// Error banner for a failed fetch. Previous results stay visible below it.
    pub error_banner: Option<String>,

    /// One-line feedback for the last command (invalid input, help).
    pub notice: Option<String>,

    /// Help text for the available commands.
    pub footer: FooterInfo,
}

/// Display information for a single recipe card.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeCard {
    /// 1-based position on the current page; `details <n>` refers to it.
    pub position: usize,

    pub id: RecipeId,
    pub title: String,
    pub description: String,
    pub rating: String,
    pub calories: String,
    pub fat: String,
    pub protein: String,
    pub sodium: String,

    /// Categories joined with `", "`.
    pub categories: String,

    /// Character ranges of the title to highlight (keyword filter matches).
    ///
    /// Each tuple is `(start_index, end_index)` in UTF-8 character indices.
    pub highlight_ranges: Vec<(usize, usize)>,

    /// Ingredients and directions, present only for the expanded recipe.
    pub details: Option<RecipeDetails>,
}

/// Expanded part of a recipe card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeDetails {
    pub ingredients: Vec<String>,
    /// Sequential steps, rendered numbered.
    pub directions: Vec<String>,
}

/// Pagination bar: Prev, numbered pages, Next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationInfo {
    pub current_page: usize,
    pub total_pages: usize,
    /// Page numbers `1..=total_pages`.
    pub pages: Vec<usize>,
    /// False on the first page.
    pub prev_enabled: bool,
    /// False on the last page.
    pub next_enabled: bool,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// Search bar display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Current search term.
    pub query: String,

    /// Active filters, e.g. `category=Vegan min-rating=4`; empty if none.
    pub filters: String,

    /// Status label (`idle`, `loading`, ...).
    pub status: String,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message.
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Command help text.
    pub keybindings: String,
}
