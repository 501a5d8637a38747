//! Event handling and state transition logic.
//!
//! This module implements the reducer of the application: [`handle_event`]
//! takes the session state and one event, applies the state transition and
//! returns the side effects to run. All state writes go through it, so replaying
//! the same events against the same initial state always yields the same state.
//!
//! # Architecture
//!
//! 1. Events arrive from the command parser or the fetch worker
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **Search**: `ChangeSearchTerm`, `Refresh`
//! - **Filtering**: `ChangeFilters`
//! - **Paging**: `SetPage`, `NextPage`, `PrevPage`
//! - **Details**: `ToggleDetails`
//! - **Worker**: `WorkerResponse` with typed message variants
//! - **Session**: `Notice`, `Quit`
//!
//! # Example
//!
//! ```rust
//! use epicurious::app::{handle_event, Action, AppState, Event};
//! use epicurious::ui::Theme;
//!
//! let mut state = AppState::new(6, Theme::default());
//! let (render, actions) = handle_event(&mut state, &Event::ChangeSearchTerm("pasta".into()))?;
//! assert!(render);
//! assert!(matches!(actions[0], Action::PostToWorker(_)));
//! # Ok::<(), epicurious::RecipeError>(())
//! ```

use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::{FilterCriteria, RecipeId};
use crate::worker::{WorkerMessage, WorkerResponse};

/// Events triggered by user input or worker responses.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. Events are processed one at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Submits a new search term; fetches unless it is empty after trimming.
    ChangeSearchTerm(String),

    /// Fetches the current search term again.
    Refresh,

    /// Replaces the filter criteria and re-filters the current raw results.
    ChangeFilters(FilterCriteria),

    /// Jumps to a 1-based page, clamped to the available pages.
    SetPage(usize),

    /// Moves to the next page.
    NextPage,

    /// Moves to the previous page.
    PrevPage,

    /// Expands or collapses a recipe's ingredients and directions.
    ToggleDetails(RecipeId),

    /// Shows a one-line message (invalid command, help).
    Notice(String),

    /// Wraps a response from the fetch worker.
    WorkerResponse(WorkerResponse),

    /// Leaves the application.
    Quit,
}

/// Processes an event, mutates state, and returns whether to re-render plus
/// the actions to execute.
///
/// # Errors
///
/// Currently every transition succeeds; the `Result` leaves room for
/// transitions that validate against external state.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event type.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?EventKind::from(event)).entered();

    if !matches!(event, Event::Notice(_) | Event::WorkerResponse(_)) {
        state.notice = None;
    }

    match event {
        Event::ChangeSearchTerm(term) => {
            let Some(query) = state.set_search_term(term) else {
                tracing::debug!("empty search term, keeping current results");
                return Ok((true, vec![]));
            };
            Ok((true, vec![issue_fetch(state, query)]))
        }
        Event::Refresh => {
            let query = state.search_term.trim();
            if query.is_empty() {
                state.notice = Some("Nothing to refresh: search for a keyword first".to_string());
                return Ok((true, vec![]));
            }
            let query = query.to_string();
            Ok((true, vec![issue_fetch(state, query)]))
        }
        Event::ChangeFilters(criteria) => {
            if &state.filters == criteria {
                tracing::debug!("filters unchanged, skipping re-filter");
                return Ok((false, vec![]));
            }
            state.filters = criteria.clone();
            state.apply_filters();
            state.reset_page();
            Ok((true, vec![]))
        }
        Event::SetPage(page) => Ok((state.set_page(*page), vec![])),
        Event::NextPage => Ok((state.next_page(), vec![])),
        Event::PrevPage => Ok((state.prev_page(), vec![])),
        Event::ToggleDetails(id) => {
            tracing::debug!(recipe_id = %id, "toggling recipe details");
            state.toggle_details(id);
            Ok((true, vec![]))
        }
        Event::Notice(message) => {
            state.notice = Some(message.clone());
            Ok((true, vec![]))
        }
        Event::WorkerResponse(response) => handle_worker_response(state, response),
        Event::Quit => Ok((false, vec![Action::Quit])),
    }
}

/// Starts a fetch for `query` and returns the action that posts it.
fn issue_fetch(state: &mut AppState, query: String) -> Action {
    let seq = state.begin_fetch();
    tracing::debug!(seq, query = %query, "issuing search");
    Action::PostToWorker(WorkerMessage::search_recipes(seq, query))
}

fn handle_worker_response(state: &mut AppState, response: &WorkerResponse) -> Result<(bool, Vec<Action>)> {
    let seq = response.seq();
    if !state.is_latest_fetch(seq) {
        tracing::debug!(seq, latest = state.latest_fetch(), "discarding stale search response");
        return Ok((false, vec![]));
    }

    match response {
        WorkerResponse::RecipesLoaded { query, recipes, .. } => {
            tracing::debug!(seq, query = %query, count = recipes.len(), "search results received");
            state.set_raw_results(recipes.clone());
            state.apply_filters();
            state.reset_page();
            state.expanded_recipe = None;
            Ok((true, vec![]))
        }
        WorkerResponse::Error { query, message, .. } => {
            tracing::error!(seq, query = %query, error = %message, "search failed");
            state.fail_fetch(message.clone());
            Ok((true, vec![]))
        }
    }
}

/// Payload-free event name for span fields; recipe lists stay out of traces.
#[derive(Debug)]
enum EventKind {
    ChangeSearchTerm,
    Refresh,
    ChangeFilters,
    SetPage,
    NextPage,
    PrevPage,
    ToggleDetails,
    Notice,
    RecipesLoaded,
    FetchError,
    Quit,
}

impl From<&Event> for EventKind {
    fn from(event: &Event) -> Self {
        match event {
            Event::ChangeSearchTerm(_) => Self::ChangeSearchTerm,
            Event::Refresh => Self::Refresh,
            Event::ChangeFilters(_) => Self::ChangeFilters,
            Event::SetPage(_) => Self::SetPage,
            Event::NextPage => Self::NextPage,
            Event::PrevPage => Self::PrevPage,
            Event::ToggleDetails(_) => Self::ToggleDetails,
            Event::Notice(_) => Self::Notice,
            Event::WorkerResponse(WorkerResponse::RecipesLoaded { .. }) => Self::RecipesLoaded,
            Event::WorkerResponse(WorkerResponse::Error { .. }) => Self::FetchError,
            Event::Quit => Self::Quit,
        }
    }
}
