#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the search text. Never fetches by itself.
    QueryChanged(String),
    /// User submitted the search form (either submit control).
    SearchSubmitted,
    /// Raw text of the results-per-page field after an edit.
    PageSizeChanged(String),
    /// User clicked the page control carrying this number.
    PageClicked(i64),
    /// Engine finished a fetch cycle.
    FetchCompleted {
        request_id: crate::RequestId,
        result: Result<crate::SearchResult, crate::FetchFailure>,
    },
    /// UI/render tick.
    Tick,
    /// Fallback for unmapped input.
    NoOp,
}
