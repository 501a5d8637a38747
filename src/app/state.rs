//! Search session state and view model computation.
//!
//! This module defines [`AppState`], the single source of truth for the search
//! session: the raw results of the last successful fetch, the search term, the
//! filter criteria, the derived filtered results, the fetch status, the page
//! being displayed and the expanded recipe.
//!
//! # Architecture
//!
//! `AppState` separates core data (raw results, term, criteria) from derived
//! state (filtered results). The filtered results are only ever written by
//! [`AppState::apply_filters`], so they are always a subset of the raw results
//! in raw order. Pages are never stored: the page count and the displayed
//! slice are recomputed from the filtered results on demand.
//!
//! # Fetch Sequencing
//!
//! Every issued fetch gets a sequence number one higher than the previous one.
//! Only the completion of the most recently issued fetch is accepted; anything
//! older is stale, whether it resolved first or last.
//!
//! # Example
//!
//! ```rust
//! use epicurious::app::AppState;
//! use epicurious::domain::Recipe;
//! use epicurious::ui::Theme;
//!
//! let mut state = AppState::new(6, Theme::default());
//! state.set_raw_results((1..=7).map(|i| Recipe::new(i.to_string(), "Stew")).collect());
//! state.apply_filters();
//!
//! assert_eq!(state.total_pages(), 2);
//! assert_eq!(state.displayed_items().len(), 6);
//! state.set_page(2);
//! assert_eq!(state.displayed_items().len(), 1);
//! ```

use super::pagination::{self, Page};
use super::status::FetchStatus;
use crate::domain::recipe::format_quantity;
use crate::domain::{FilterCriteria, Recipe, RecipeId};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    EmptyState, FooterInfo, HeaderInfo, PaginationInfo, RecipeCard, RecipeDetails, SearchBarInfo,
    UIViewModel,
};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use std::collections::BTreeSet;

/// Help line shown in the footer.
const FOOTER_HELP: &str =
    "search <term>  filter <key>=<value>|clear  next  prev  page <n>  details <n>  refresh  help  quit";

/// Central search session state.
///
/// Mutated only by the event handler in response to events; view models are
/// computed on demand from state snapshots.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Unfiltered recipes of the last successful fetch, in API order.
    ///
    /// Replaced wholesale by `set_raw_results()`. Kept when a fetch fails.
    pub raw_results: Vec<Recipe>,

    /// Raw results narrowed by `filters`.
    ///
    /// Recomputed by `apply_filters()` only.
    pub filtered_results: Vec<Recipe>,

    /// Last non-blank search term submitted, untrimmed.
    pub search_term: String,

    /// Current filter form selection.
    pub filters: FilterCriteria,

    /// Outcome of the last search attempt.
    pub status: FetchStatus,

    /// 1-based index of the page being displayed.
    ///
    /// Kept within `1..=total_pages()` by every transition.
    pub current_page: usize,

    /// Recipes per page, at least 1.
    pub page_size: usize,

    /// Recipe whose ingredients and directions are shown, if any.
    pub expanded_recipe: Option<RecipeId>,

    /// Message of the last failed fetch; cleared by the next success.
    pub last_error: Option<String>,

    /// Feedback for the last command, cleared by the next accepted one.
    pub notice: Option<String>,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// Sequence number of the most recently issued fetch (0 = none yet).
    latest_fetch: u64,
}

impl AppState {
    /// Creates an empty session: no results, idle, page 1.
    ///
    /// A `page_size` of 0 is treated as 1.
    #[must_use]
    pub fn new(page_size: usize, theme: Theme) -> Self {
        Self {
            raw_results: Vec::new(),
            filtered_results: Vec::new(),
            search_term: String::new(),
            filters: FilterCriteria::default(),
            status: FetchStatus::Idle,
            current_page: 1,
            page_size: page_size.max(1),
            expanded_recipe: None,
            last_error: None,
            notice: None,
            theme,
            latest_fetch: 0,
        }
    }

    /// Replaces the raw results and marks the fetch as succeeded.
    ///
    /// Does not recompute the filtered results; callers follow up with
    /// [`apply_filters`](Self::apply_filters).
    pub fn set_raw_results(&mut self, recipes: Vec<Recipe>) {
        tracing::debug!(count = recipes.len(), "raw results replaced");
        self.raw_results = recipes;
        self.status = FetchStatus::Succeeded;
        self.last_error = None;
    }

    /// Recomputes the filtered results from the raw results and the criteria.
    ///
    /// Keeps every raw recipe the criteria accept, preserving raw order.
    /// Calling it again without changing either input yields equal output.
    pub fn apply_filters(&mut self) {
        let _span = tracing::debug_span!(
            "apply_filters",
            raw_count = self.raw_results.len(),
            filters = %self.filters.summary()
        )
        .entered();

        let active = self.filters.active_filters();
        self.filtered_results = self
            .raw_results
            .iter()
            .filter(|recipe| active.iter().all(|f| f.matches(recipe)))
            .cloned()
            .collect();

        tracing::debug!(
            filtered_count = self.filtered_results.len(),
            filter_names = ?active.iter().map(|f| f.name()).collect::<Vec<_>>(),
            "filters applied"
        );
    }

    /// Stores a new search term and returns the query to fetch, if any.
    ///
    /// The query is the term trimmed of surrounding whitespace. An empty query
    /// never fetches and leaves the previous term and results in place.
    pub fn set_search_term(&mut self, term: &str) -> Option<String> {
        let query = term.trim();
        if query.is_empty() {
            return None;
        }
        term.clone_into(&mut self.search_term);
        Some(query.to_string())
    }

    /// Registers a new fetch and returns its sequence number.
    ///
    /// Sets the status to loading. Any fetch issued before is now stale.
    pub fn begin_fetch(&mut self) -> u64 {
        self.latest_fetch += 1;
        self.status = FetchStatus::Loading;
        self.latest_fetch
    }

    /// Returns true if `seq` belongs to the most recently issued fetch.
    #[must_use]
    pub const fn is_latest_fetch(&self, seq: u64) -> bool {
        seq != 0 && seq == self.latest_fetch
    }

    /// Sequence number of the most recently issued fetch (0 if none).
    #[must_use]
    pub const fn latest_fetch(&self) -> u64 {
        self.latest_fetch
    }

    /// Marks the latest fetch as failed, keeping the current results.
    pub fn fail_fetch(&mut self, message: String) {
        self.status = FetchStatus::Failed;
        self.last_error = Some(message);
    }

    /// Total pages of the filtered results, at least 1.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        pagination::total_pages(self.filtered_results.len(), self.page_size)
    }

    /// The page currently displayed.
    #[must_use]
    pub fn current_page_view(&self) -> Page<'_, Recipe> {
        pagination::compute_page(
            &self.filtered_results,
            pagination::clamp_page(self.current_page, self.total_pages()),
            self.page_size,
        )
    }

    /// Recipes on the current page.
    #[must_use]
    pub fn displayed_items(&self) -> &[Recipe] {
        self.current_page_view().items
    }

    /// Jumps to page `page`, clamped into `1..=total_pages()`.
    ///
    /// Returns true if the page changed.
    pub fn set_page(&mut self, page: usize) -> bool {
        let clamped = pagination::clamp_page(page, self.total_pages());
        if clamped != page {
            tracing::debug!(requested = page, clamped, "page index clamped");
        }
        let changed = clamped != self.current_page;
        self.current_page = clamped;
        changed
    }

    /// Moves one page forward; no-op on the last page.
    pub fn next_page(&mut self) -> bool {
        self.set_page(self.current_page.saturating_add(1))
    }

    /// Moves one page back; no-op on the first page.
    pub fn prev_page(&mut self) -> bool {
        self.set_page(self.current_page.saturating_sub(1))
    }

    /// Returns to page 1 after the filtered results changed.
    pub fn reset_page(&mut self) {
        self.current_page = 1;
    }

    /// Toggles the details of `id`.
    ///
    /// Selecting the expanded recipe collapses it; selecting another recipe
    /// replaces it. At most one recipe is expanded.
    pub fn toggle_details(&mut self, id: &RecipeId) {
        if self.expanded_recipe.as_ref() == Some(id) {
            self.expanded_recipe = None;
        } else {
            self.expanded_recipe = Some(id.clone());
        }
    }

    /// Id of the recipe at 1-based `position` on the current page.
    #[must_use]
    pub fn recipe_at(&self, position: usize) -> Option<&RecipeId> {
        position
            .checked_sub(1)
            .and_then(|idx| self.displayed_items().get(idx))
            .map(|recipe| &recipe.id)
    }

    /// Computes a renderable view model from the current state.
    ///
    /// Cards are shown whenever the current page has recipes, whatever the
    /// status: a failed or pending refetch keeps the last good results on
    /// screen. The pagination bar only appears with more than one page.
    #[must_use]
    pub fn compute_viewmodel(&self) -> UIViewModel {
        let total_pages = self.total_pages();
        let current_page = pagination::clamp_page(self.current_page, total_pages);
        let page = pagination::compute_page(&self.filtered_results, current_page, self.page_size);

        let keyword_tokens: Vec<String> = self
            .filters
            .keyword
            .as_deref()
            .map(|k| k.split_whitespace().map(str::to_lowercase).collect())
            .unwrap_or_default();
        let matcher = (!keyword_tokens.is_empty()).then(SkimMatcherV2::default);

        let cards: Vec<RecipeCard> = page
            .items
            .iter()
            .enumerate()
            .map(|(idx, recipe)| self.compute_card(recipe, idx + 1, &keyword_tokens, matcher.as_ref()))
            .collect();

        let pagination = (total_pages > 1).then(|| PaginationInfo {
            current_page,
            total_pages,
            pages: (1..=total_pages).collect(),
            prev_enabled: current_page > 1,
            next_enabled: current_page < total_pages,
        });

        let empty_state = cards.is_empty().then(|| self.compute_empty_state());

        UIViewModel {
            status: self.status,
            cards,
            current_page,
            total_pages,
            expanded_recipe_id: self.expanded_recipe.clone(),
            header: self.compute_header(),
            search_bar: SearchBarInfo {
                query: self.search_term.clone(),
                filters: self.filters.summary(),
                status: self.status.label().to_string(),
            },
            pagination,
            empty_state,
            error_banner: match self.status {
                FetchStatus::Failed => self
                    .last_error
                    .as_ref()
                    .map(|e| format!("Search failed: {e}")),
                _ => None,
            },
            notice: self.notice.clone(),
            footer: FooterInfo {
                keybindings: FOOTER_HELP.to_string(),
            },
        }
    }

    fn compute_card(
        &self,
        recipe: &Recipe,
        position: usize,
        keyword_tokens: &[String],
        matcher: Option<&SkimMatcherV2>,
    ) -> RecipeCard {
        let details = (self.expanded_recipe.as_ref() == Some(&recipe.id)).then(|| RecipeDetails {
            ingredients: recipe.ingredients.clone(),
            directions: recipe.directions.clone(),
        });

        let highlight_ranges = matcher.map_or_else(Vec::new, |m| {
            Self::compute_highlight_ranges(&recipe.title, keyword_tokens, m)
        });

        RecipeCard {
            position,
            id: recipe.id.clone(),
            title: recipe.title.clone(),
            description: recipe.description.clone().unwrap_or_default(),
            rating: format_quantity(recipe.rating),
            calories: format_quantity(recipe.calories),
            fat: format_quantity(recipe.fat),
            protein: format_quantity(recipe.protein),
            sodium: format_quantity(recipe.sodium),
            categories: recipe.categories.join(", "),
            highlight_ranges,
            details,
        }
    }

    /// Computes character index ranges of `text` matched by the keyword tokens.
    ///
    /// Matched indices of all tokens are merged, then consecutive indices are
    /// coalesced into `(start, end)` ranges with exclusive end.
    fn compute_highlight_ranges(text: &str, tokens: &[String], matcher: &SkimMatcherV2) -> Vec<(usize, usize)> {
        let indices: BTreeSet<usize> = tokens
            .iter()
            .filter_map(|token| matcher.fuzzy_indices(text, token))
            .flat_map(|(_score, indices)| indices)
            .collect();

        let mut ranges: Vec<(usize, usize)> = Vec::new();
        for idx in indices {
            match ranges.last_mut() {
                Some((_, end)) if *end == idx => *end = idx + 1,
                _ => ranges.push((idx, idx + 1)),
            }
        }
        ranges
    }

    fn compute_header(&self) -> HeaderInfo {
        let count = self.filtered_results.len();
        let title = if self.raw_results.len() == count {
            format!(" EpiCurious Recipes ({count}) ")
        } else {
            format!(" EpiCurious Recipes ({count} of {}) ", self.raw_results.len())
        };
        HeaderInfo { title }
    }

    fn compute_empty_state(&self) -> EmptyState {
        let subtitle = match self.status {
            FetchStatus::Idle => "Type `search <keyword>` to discover recipes".to_string(),
            FetchStatus::Loading => format!("Searching for \"{}\"...", self.search_term.trim()),
            FetchStatus::Failed => "The search could not be completed".to_string(),
            FetchStatus::Succeeded if !self.raw_results.is_empty() => {
                "No recipe matches the active filters; try `filter clear`".to_string()
            }
            FetchStatus::Succeeded => "Try a different keyword".to_string(),
        };
        EmptyState {
            message: "No recipes found.".to_string(),
            subtitle,
        }
    }
}
