use std::fmt;

/// Generation number of a fetch cycle. Ids start at 1 and only grow.
pub type RequestId = u64;

/// One search hit as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Item {
    pub id: String,
    pub title: String,
    pub url: String,
}

/// The full, unpaginated answer to one search. Replaced wholesale on every
/// successful fetch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchResult {
    pub hits: Vec<Item>,
}

impl SearchResult {
    pub fn new(hits: Vec<Item>) -> Self {
        Self { hits }
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}

/// Any failed fetch cycle. The cause is kept for logs only; the user sees a
/// generic notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    pub message: String,
}

impl FetchFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fetch failed: {}", self.message)
    }
}

impl std::error::Error for FetchFailure {}
