use std::sync::Once;

use hn_search_core::{
    init, update, AppState, DataSource, Effect, FetchFailure, FetchRequest, FetchState, Item, Msg,
    ResponseOrdering, SearchResult, SearchSettings,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(search_logging::initialize_for_tests);
}

fn result_with(ids: &[&str]) -> SearchResult {
    SearchResult::new(
        ids.iter()
            .map(|id| Item {
                id: id.to_string(),
                title: format!("title {id}"),
                url: format!("https://news.example/{id}"),
            })
            .collect(),
    )
}

fn complete(
    state: AppState,
    request_id: u64,
    result: Result<SearchResult, FetchFailure>,
) -> AppState {
    update(state, Msg::FetchCompleted { request_id, result }).0
}

fn submit(state: AppState, query: &str) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::QueryChanged(query.to_string()));
    update(state, Msg::SearchSubmitted)
}

fn ids(state: &AppState) -> Vec<String> {
    state
        .fetch_state()
        .data
        .hits
        .iter()
        .map(|hit| hit.id.clone())
        .collect()
}

#[test]
fn data_source_starts_loading_with_initial_data() {
    init_logging();
    let (source, request) = DataSource::new(
        "https://api.example/search?query=a",
        result_with(&["seed"]),
        ResponseOrdering::LatestRequest,
    );

    assert_eq!(
        request,
        FetchRequest {
            request_id: 1,
            url: "https://api.example/search?query=a".to_string(),
        }
    );
    assert_eq!(
        source.state(),
        &FetchState {
            data: result_with(&["seed"]),
            is_loading: true,
            is_error: false,
        }
    );
}

#[test]
fn data_source_only_refetches_on_url_change() {
    init_logging();
    let (mut source, _) = DataSource::new(
        "https://api.example/search?query=a",
        SearchResult::default(),
        ResponseOrdering::LatestRequest,
    );

    assert!(source.set_url("https://api.example/search?query=a").is_none());
    let request = source.set_url("https://api.example/search?query=b");
    assert_eq!(
        request,
        Some(FetchRequest {
            request_id: 2,
            url: "https://api.example/search?query=b".to_string(),
        })
    );
    assert!(source.set_url("https://api.example/search?query=b").is_none());
}

#[test]
fn success_replaces_data_and_clears_loading() {
    init_logging();
    let (state, _) = init(&SearchSettings::default());
    let state = complete(state, 1, Ok(result_with(&["a", "b"])));

    assert_eq!(ids(&state), vec!["a", "b"]);
    assert!(!state.fetch_state().is_loading);
    assert!(!state.fetch_state().is_error);
}

#[test]
fn failure_keeps_data_and_later_success_recovers() {
    init_logging();
    let (state, _) = init(&SearchSettings::default());
    let state = complete(state, 1, Ok(result_with(&["a", "b"])));

    let (state, _) = submit(state, "broken");
    let state = complete(state, 2, Err(FetchFailure::new("network error")));
    assert_eq!(ids(&state), vec!["a", "b"]);
    assert!(state.fetch_state().is_error);
    assert!(!state.fetch_state().is_loading);
    assert!(state.view().show_error);

    let (state, effects) = submit(state, "fixed");
    assert_eq!(effects.len(), 1);
    assert!(!state.fetch_state().is_error);
    assert!(state.fetch_state().is_loading);

    let state = complete(state, 3, Ok(result_with(&["c"])));
    assert_eq!(ids(&state), vec!["c"]);
    assert!(!state.view().show_error);
}

#[test]
fn stale_completion_is_dropped_by_default() {
    init_logging();
    let (state, _) = init(&SearchSettings::default());
    let (state, _) = submit(state, "second");

    // Newest answer lands first, then the superseded one.
    let mut state = complete(state, 2, Ok(result_with(&["new"])));
    state.consume_dirty();
    let mut state = complete(state, 1, Ok(result_with(&["old"])));

    assert_eq!(ids(&state), vec!["new"]);
    assert!(!state.fetch_state().is_loading);
    assert!(!state.consume_dirty());
}

#[test]
fn stale_completion_does_not_end_loading_of_newer_request() {
    init_logging();
    let (state, _) = init(&SearchSettings::default());
    let (state, _) = submit(state, "second");
    let state = complete(state, 1, Err(FetchFailure::new("late failure")));

    assert!(state.fetch_state().is_loading);
    assert!(!state.fetch_state().is_error);
}

#[test]
fn last_resolved_ordering_lets_the_late_answer_win() {
    init_logging();
    let settings = SearchSettings {
        ordering: ResponseOrdering::LastResolved,
        ..SearchSettings::default()
    };
    let (state, _) = init(&settings);
    let (state, _) = submit(state, "second");

    let state = complete(state, 2, Ok(result_with(&["new"])));
    let state = complete(state, 1, Ok(result_with(&["old"])));

    assert_eq!(ids(&state), vec!["old"]);
}

#[test]
fn last_resolved_ordering_clears_loading_on_first_completion() {
    init_logging();
    let settings = SearchSettings {
        ordering: ResponseOrdering::LastResolved,
        ..SearchSettings::default()
    };
    let (state, _) = init(&settings);
    let (state, _) = submit(state, "second");
    let state = complete(state, 1, Ok(result_with(&["old"])));

    assert!(!state.fetch_state().is_loading);
    assert_eq!(ids(&state), vec!["old"]);
}

#[test]
fn completion_for_unknown_request_is_ignored() {
    init_logging();
    let (state, _) = init(&SearchSettings::default());
    let before = state.fetch_state().clone();

    let state = complete(state, 42, Ok(result_with(&["ghost"])));
    let state = complete(state, 0, Ok(result_with(&["ghost"])));

    assert_eq!(state.fetch_state(), &before);
}
