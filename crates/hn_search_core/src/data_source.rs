use search_logging::{search_debug, search_info, search_warn};

use crate::{FetchFailure, RequestId, SearchResult};

/// Which completions are allowed to update the state when fetch cycles
/// overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseOrdering {
    /// Only the most recently issued request may apply; older completions are
    /// dropped when they arrive.
    #[default]
    LatestRequest,
    /// Every completion applies in arrival order, so whichever resolves last
    /// wins.
    LastResolved,
}

/// What the view observes about the data source.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FetchState {
    pub data: SearchResult,
    pub is_loading: bool,
    pub is_error: bool,
}

/// One GET the engine must perform on behalf of a fetch cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub request_id: RequestId,
    pub url: String,
}

/// Fetch controller bound to a single current URL.
///
/// Every change of URL starts exactly one fetch cycle. Requests are never
/// aborted; overlapping completions are resolved by [`ResponseOrdering`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSource {
    url: String,
    state: FetchState,
    last_issued: RequestId,
    ordering: ResponseOrdering,
}

impl DataSource {
    /// Creates the source and starts the fetch cycle for `initial_url`.
    pub fn new(
        initial_url: impl Into<String>,
        initial_data: SearchResult,
        ordering: ResponseOrdering,
    ) -> (Self, FetchRequest) {
        let mut source = Self {
            url: initial_url.into(),
            state: FetchState {
                data: initial_data,
                is_loading: false,
                is_error: false,
            },
            last_issued: 0,
            ordering,
        };
        let request = source.begin_cycle();
        (source, request)
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    pub fn last_issued(&self) -> RequestId {
        self.last_issued
    }

    /// Points the source at `url`. Returns the request to issue, or `None`
    /// when the URL is unchanged.
    pub fn set_url(&mut self, url: impl Into<String>) -> Option<FetchRequest> {
        let url = url.into();
        if url == self.url {
            search_debug!("set_url: url unchanged, no fetch ({})", url);
            return None;
        }
        self.url = url;
        Some(self.begin_cycle())
    }

    /// Applies the outcome of request `request_id`. Returns whether the
    /// observable state changed.
    pub fn complete(
        &mut self,
        request_id: RequestId,
        result: Result<SearchResult, FetchFailure>,
    ) -> bool {
        if request_id == 0 || request_id > self.last_issued {
            search_warn!(
                "Ignoring completion for unknown request {} (last issued {})",
                request_id,
                self.last_issued
            );
            return false;
        }
        if self.ordering == ResponseOrdering::LatestRequest && request_id != self.last_issued {
            search_debug!(
                "Dropping stale completion {} (latest {})",
                request_id,
                self.last_issued
            );
            return false;
        }

        match result {
            Ok(data) => {
                search_info!("Request {} returned {} hits", request_id, data.len());
                self.state.data = data;
            }
            Err(failure) => {
                search_warn!("Request {} failed: {}", request_id, failure);
                self.state.is_error = true;
            }
        }
        self.state.is_loading = false;
        true
    }

    fn begin_cycle(&mut self) -> FetchRequest {
        self.last_issued += 1;
        self.state.is_error = false;
        self.state.is_loading = true;
        search_info!("Fetch {} issued for {}", self.last_issued, self.url);
        FetchRequest {
            request_id: self.last_issued,
            url: self.url.clone(),
        }
    }
}
