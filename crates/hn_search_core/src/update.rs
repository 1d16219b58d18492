use search_logging::search_debug;

use crate::{AppState, Effect, Msg, SearchSettings, MAX_PAGE_SIZE};

/// Builds the initial state. The returned effects hold the one fetch issued
/// for the default query before any user interaction.
pub fn init(settings: &SearchSettings) -> (AppState, Vec<Effect>) {
    let (state, request) = AppState::new(settings);
    (state, vec![Effect::from(request)])
}

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::QueryChanged(text) => {
            state.set_query(text);
            Vec::new()
        }
        Msg::SearchSubmitted => match state.submit_search() {
            Some(request) => vec![Effect::from(request)],
            None => Vec::new(),
        },
        Msg::PageSizeChanged(raw) => {
            match parse_page_size(&raw) {
                Some(size) => state.set_page_size(size),
                None => search_debug!("Ignoring non-numeric page size {:?}", raw),
            }
            Vec::new()
        }
        Msg::PageClicked(page) => {
            // No clamping: the `[0]` placeholder selects an empty page.
            state.set_current_page(page);
            Vec::new()
        }
        Msg::FetchCompleted { request_id, result } => {
            state.apply_completion(request_id, result);
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

/// Reads the results-per-page field: blank is 0, values are held to
/// `0..=MAX_PAGE_SIZE`, anything non-numeric is rejected.
fn parse_page_size(raw: &str) -> Option<usize> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0);
    }
    let value: i64 = trimmed.parse().ok()?;
    Some(value.clamp(0, MAX_PAGE_SIZE as i64) as usize)
}
