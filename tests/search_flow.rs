//! Integration tests for the search session reducer.
//!
//! These tests drive `handle_event` the way the terminal front end does and
//! play the worker's part by hand (or with an in-memory source), covering:
//! - Pagination of loaded results
//! - Empty search terms
//! - Failed searches keeping the last good results
//! - Detail toggling
//! - Out-of-order responses

use async_trait::async_trait;
use epicurious::worker::{RecipeSource, SearchWorker, WorkerMessage, WorkerResponse};
use epicurious::{
    handle_event, Action, AppState, Event, FetchStatus, FilterCriteria, Recipe, RecipeError, RecipeId, Theme,
};
use std::time::Duration;

fn new_state() -> AppState {
    AppState::new(6, Theme::default())
}

fn recipes(prefix: &str, count: usize) -> Vec<Recipe> {
    (1..=count)
        .map(|i| Recipe::new(format!("{prefix}-{i}"), format!("{prefix} recipe {i}")))
        .collect()
}

/// Submits a term and returns the sequence number of the fetch it issued.
fn search(state: &mut AppState, term: &str) -> u64 {
    let (_, actions) = handle_event(state, &Event::ChangeSearchTerm(term.to_string())).unwrap();
    match actions.as_slice() {
        [Action::PostToWorker(message)] => message.seq(),
        other => panic!("expected one fetch for {term:?}, got {other:?}"),
    }
}

fn load(state: &mut AppState, seq: u64, query: &str, recipes: Vec<Recipe>) -> bool {
    let response = WorkerResponse::RecipesLoaded {
        seq,
        query: query.to_string(),
        recipes,
    };
    handle_event(state, &Event::WorkerResponse(response)).unwrap().0
}

fn fail(state: &mut AppState, seq: u64, query: &str, message: &str) -> bool {
    let response = WorkerResponse::Error {
        seq,
        query: query.to_string(),
        message: message.to_string(),
    };
    handle_event(state, &Event::WorkerResponse(response)).unwrap().0
}

fn displayed_ids(state: &AppState) -> Vec<String> {
    state.displayed_items().iter().map(|r| r.id.as_str().to_string()).collect()
}

// ============================================================================
// Pagination
// ============================================================================

#[test]
fn test_seven_results_span_two_pages() {
    let mut state = new_state();
    let seq = search(&mut state, "chicken");
    assert_eq!(state.status, FetchStatus::Loading);

    load(&mut state, seq, "chicken", recipes("chicken", 7));

    assert_eq!(state.status, FetchStatus::Succeeded);
    assert_eq!(state.total_pages(), 2);
    assert_eq!(state.displayed_items().len(), 6);

    handle_event(&mut state, &Event::NextPage).unwrap();
    assert_eq!(state.current_page, 2);
    assert_eq!(displayed_ids(&state), vec!["chicken-7"]);

    // Next on the last page is a no-op.
    let (render, _) = handle_event(&mut state, &Event::NextPage).unwrap();
    assert!(!render);
    assert_eq!(state.current_page, 2);

    let vm = state.compute_viewmodel();
    let bar = vm.pagination.unwrap();
    assert!(bar.prev_enabled);
    assert!(!bar.next_enabled);
    assert_eq!(bar.pages, vec![1, 2]);
}

#[test]
fn test_set_page_is_clamped() {
    let mut state = new_state();
    let seq = search(&mut state, "soup");
    load(&mut state, seq, "soup", recipes("soup", 13));

    handle_event(&mut state, &Event::SetPage(99)).unwrap();
    assert_eq!(state.current_page, 3);

    handle_event(&mut state, &Event::SetPage(0)).unwrap();
    assert_eq!(state.current_page, 1);
}

#[test]
fn test_new_results_reset_page_and_details() {
    let mut state = new_state();
    let seq = search(&mut state, "cake");
    load(&mut state, seq, "cake", recipes("cake", 12));
    handle_event(&mut state, &Event::SetPage(2)).unwrap();
    handle_event(&mut state, &Event::ToggleDetails(RecipeId::new("cake-8"))).unwrap();

    let seq = search(&mut state, "pie");
    load(&mut state, seq, "pie", recipes("pie", 3));

    assert_eq!(state.current_page, 1);
    assert_eq!(state.expanded_recipe, None);
    assert_eq!(state.compute_viewmodel().pagination, None);
}

// ============================================================================
// Search terms
// ============================================================================

#[test]
fn test_empty_term_keeps_results_and_does_not_fetch() {
    let mut state = new_state();
    let seq = search(&mut state, "chicken");
    load(&mut state, seq, "chicken", recipes("chicken", 4));

    for blank in ["", "   ", "\t"] {
        let (_, actions) = handle_event(&mut state, &Event::ChangeSearchTerm(blank.to_string())).unwrap();
        assert!(actions.is_empty(), "blank term {blank:?} must not fetch");
    }

    assert_eq!(state.status, FetchStatus::Succeeded);
    assert_eq!(state.filtered_results.len(), 4);
    assert_eq!(state.latest_fetch(), seq);
}

#[test]
fn test_blank_term_keeps_previous_query() {
    let mut state = new_state();
    let seq = search(&mut state, "chicken");
    load(&mut state, seq, "chicken", recipes("chicken", 4));

    handle_event(&mut state, &Event::ChangeSearchTerm("   ".into())).unwrap();
    assert_eq!(state.compute_viewmodel().search_bar.query, "chicken");

    let (_, actions) = handle_event(&mut state, &Event::Refresh).unwrap();
    match actions.as_slice() {
        [Action::PostToWorker(WorkerMessage::SearchRecipes { query, .. })] => assert_eq!(query, "chicken"),
        other => panic!("refresh after a blank term should refetch, got {other:?}"),
    }
    assert!(state.notice.is_none());
}

#[test]
fn test_term_is_trimmed_before_fetching() {
    let mut state = new_state();
    let (_, actions) = handle_event(&mut state, &Event::ChangeSearchTerm("  green beans ".into())).unwrap();

    match actions.as_slice() {
        [Action::PostToWorker(WorkerMessage::SearchRecipes { query, .. })] => assert_eq!(query, "green beans"),
        other => panic!("unexpected actions {other:?}"),
    }
}

#[test]
fn test_refresh_refetches_current_term() {
    let mut state = new_state();
    let first = search(&mut state, "salad");
    load(&mut state, first, "salad", recipes("salad", 2));

    let (_, actions) = handle_event(&mut state, &Event::Refresh).unwrap();
    match actions.as_slice() {
        [Action::PostToWorker(WorkerMessage::SearchRecipes { seq, query, .. })] => {
            assert_eq!(query, "salad");
            assert!(*seq > first);
        }
        other => panic!("unexpected actions {other:?}"),
    }
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn test_failed_search_keeps_previous_results() {
    let mut state = new_state();
    let seq = search(&mut state, "chicken");
    load(&mut state, seq, "chicken", recipes("chicken", 3));

    let seq = search(&mut state, "pasta");
    fail(&mut state, seq, "pasta", "HTTP error! status: 500");

    assert_eq!(state.status, FetchStatus::Failed);
    assert_eq!(state.search_term, "pasta");
    assert_eq!(displayed_ids(&state), vec!["chicken-1", "chicken-2", "chicken-3"]);

    let vm = state.compute_viewmodel();
    assert_eq!(vm.cards.len(), 3);
    assert_eq!(vm.error_banner.as_deref(), Some("Search failed: HTTP error! status: 500"));
}

#[test]
fn test_success_after_failure_clears_error() {
    let mut state = new_state();
    let seq = search(&mut state, "pasta");
    fail(&mut state, seq, "pasta", "boom");

    let seq = search(&mut state, "pasta");
    load(&mut state, seq, "pasta", recipes("pasta", 1));

    assert_eq!(state.status, FetchStatus::Succeeded);
    assert_eq!(state.compute_viewmodel().error_banner, None);
}

// ============================================================================
// Details
// ============================================================================

#[test]
fn test_toggle_details() {
    let mut state = new_state();
    let seq = search(&mut state, "stew");
    let mut loaded = recipes("stew", 1);
    loaded.push(Recipe::new("42", "Beef Stew"));
    loaded.push(Recipe::new("43", "Lamb Stew"));
    load(&mut state, seq, "stew", loaded);

    let forty_two = Event::ToggleDetails(RecipeId::new("42"));
    handle_event(&mut state, &forty_two).unwrap();
    handle_event(&mut state, &forty_two).unwrap();
    assert_eq!(state.expanded_recipe, None);

    handle_event(&mut state, &forty_two).unwrap();
    handle_event(&mut state, &Event::ToggleDetails(RecipeId::new("43"))).unwrap();
    assert_eq!(state.expanded_recipe, Some(RecipeId::new("43")));

    let vm = state.compute_viewmodel();
    let expanded: Vec<&str> = vm
        .cards
        .iter()
        .filter(|c| c.details.is_some())
        .map(|c| c.id.as_str())
        .collect();
    assert_eq!(expanded, vec!["43"]);
}

// ============================================================================
// Filters
// ============================================================================

#[test]
fn test_filter_change_refilters_without_fetching() {
    let mut state = new_state();
    let seq = search(&mut state, "dinner");
    let mut loaded = recipes("dinner", 10);
    for recipe in loaded.iter_mut().step_by(2) {
        recipe.categories = vec!["Vegan".into()];
    }
    load(&mut state, seq, "dinner", loaded);
    handle_event(&mut state, &Event::SetPage(2)).unwrap();

    let mut criteria = FilterCriteria::default();
    criteria.set("category", "vegan").unwrap();
    let (render, actions) = handle_event(&mut state, &Event::ChangeFilters(criteria.clone())).unwrap();

    assert!(render);
    assert!(actions.is_empty());
    assert_eq!(state.current_page, 1);
    assert_eq!(state.raw_results.len(), 10);
    assert_eq!(
        displayed_ids(&state),
        vec!["dinner-1", "dinner-3", "dinner-5", "dinner-7", "dinner-9"]
    );

    // Same criteria again: nothing to do.
    let (render, _) = handle_event(&mut state, &Event::ChangeFilters(criteria)).unwrap();
    assert!(!render);
}

#[test]
fn test_filters_apply_to_later_results() {
    let mut state = new_state();
    let mut criteria = FilterCriteria::default();
    criteria.set("max-calories", "500").unwrap();
    handle_event(&mut state, &Event::ChangeFilters(criteria)).unwrap();

    let seq = search(&mut state, "bowl");
    let mut light = Recipe::new("light", "Light Bowl");
    light.calories = Some(320.0);
    let mut heavy = Recipe::new("heavy", "Heavy Bowl");
    heavy.calories = Some(950.0);
    let unknown = Recipe::new("unknown", "Mystery Bowl");
    load(&mut state, seq, "bowl", vec![light, heavy, unknown]);

    assert_eq!(displayed_ids(&state), vec!["light"]);
}

// ============================================================================
// Out-of-order responses
// ============================================================================

#[test]
fn test_stale_success_is_discarded() {
    let mut state = new_state();
    let chicken = search(&mut state, "chicken");
    let pasta = search(&mut state, "pasta");

    assert!(load(&mut state, pasta, "pasta", recipes("pasta", 2)));
    assert!(!load(&mut state, chicken, "chicken", recipes("chicken", 5)));

    assert_eq!(displayed_ids(&state), vec!["pasta-1", "pasta-2"]);
    assert_eq!(state.status, FetchStatus::Succeeded);
}

#[test]
fn test_stale_failure_is_discarded() {
    let mut state = new_state();
    let chicken = search(&mut state, "chicken");
    let pasta = search(&mut state, "pasta");

    load(&mut state, pasta, "pasta", recipes("pasta", 1));
    assert!(!fail(&mut state, chicken, "chicken", "HTTP error! status: 502"));

    assert_eq!(state.status, FetchStatus::Succeeded);
    assert_eq!(state.last_error, None);
}

/// Answers after a delay taken from the query, e.g. `slow:80` waits 80ms.
struct DelayedSource;

#[async_trait]
impl RecipeSource for DelayedSource {
    async fn search(&self, query: &str) -> epicurious::Result<Vec<Recipe>> {
        let delay = query
            .split_once(':')
            .and_then(|(_, ms)| ms.parse::<u64>().ok())
            .unwrap_or(0);
        tokio::time::sleep(Duration::from_millis(delay)).await;
        if query.starts_with("fail") {
            return Err(RecipeError::Http { status: 503 });
        }
        Ok(vec![Recipe::new(query, query)])
    }
}

#[tokio::test]
async fn test_worker_responses_out_of_order() {
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    let worker = SearchWorker::new(DelayedSource, tx);
    let mut state = new_state();

    for term in ["slow:150", "fast:0"] {
        let (_, actions) = handle_event(&mut state, &Event::ChangeSearchTerm(term.into())).unwrap();
        for action in actions {
            if let Action::PostToWorker(message) = action {
                worker.post(message);
            }
        }
    }

    let first = rx.recv().await.unwrap();
    let second = rx.recv().await.unwrap();
    assert_eq!(first.seq(), 2, "the fast search finishes first");
    assert_eq!(second.seq(), 1);

    handle_event(&mut state, &Event::WorkerResponse(first)).unwrap();
    handle_event(&mut state, &Event::WorkerResponse(second)).unwrap();

    assert_eq!(displayed_ids(&state), vec!["fast:0"]);
    assert_eq!(state.status, FetchStatus::Succeeded);
}

#[tokio::test]
async fn test_worker_failure_becomes_failed_status() {
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    let worker = SearchWorker::new(DelayedSource, tx);
    let mut state = new_state();

    let (_, actions) = handle_event(&mut state, &Event::ChangeSearchTerm("fail:0".into())).unwrap();
    for action in actions {
        if let Action::PostToWorker(message) = action {
            worker.post(message).await.unwrap();
        }
    }

    let response = rx.recv().await.unwrap();
    handle_event(&mut state, &Event::WorkerResponse(response)).unwrap();

    assert_eq!(state.status, FetchStatus::Failed);
    assert_eq!(state.last_error.as_deref(), Some("HTTP error! status: 503"));
}
