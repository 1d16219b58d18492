use search_logging::search_warn;
use url::Url;

use crate::view_model::{AppViewModel, Body, ItemView};
use crate::{
    page_buttons, page_count, page_slice, DataSource, FetchFailure, FetchRequest, FetchState,
    RequestId, ResponseOrdering, SearchResult,
};

pub const DEFAULT_BASE_URL: &str = "https://hn.algolia.com/api/v1/search";
pub const DEFAULT_QUERY: &str = "MicroCODE";
pub const DEFAULT_PAGE_SIZE: usize = 8;
/// Upper bound of the results-per-page field.
pub const MAX_PAGE_SIZE: usize = 100;

/// Startup configuration for the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSettings {
    pub base_url: String,
    pub query: String,
    pub page_size: usize,
    pub ordering: ResponseOrdering,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            query: DEFAULT_QUERY.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            ordering: ResponseOrdering::default(),
        }
    }
}

/// Builds `<base_url>?query=<query>` with the query url-encoded.
///
/// An unparsable base URL is passed through verbatim so the fetch fails and
/// surfaces as a normal error notice.
pub fn build_search_url(base_url: &str, query: &str) -> String {
    match Url::parse_with_params(base_url, &[("query", query)]) {
        Ok(url) => url.into(),
        Err(err) => {
            search_warn!("Invalid base url {:?}: {}", base_url, err);
            format!("{base_url}?query={query}")
        }
    }
}

/// Everything the search view owns: the form fields, the current page and
/// the data source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    base_url: String,
    query: String,
    page_size: usize,
    current_page: i64,
    source: DataSource,
    dirty: bool,
}

impl AppState {
    pub(crate) fn new(settings: &SearchSettings) -> (Self, FetchRequest) {
        let url = build_search_url(&settings.base_url, &settings.query);
        let (source, request) = DataSource::new(url, SearchResult::default(), settings.ordering);
        let state = Self {
            base_url: settings.base_url.clone(),
            query: settings.query.clone(),
            page_size: settings.page_size.min(MAX_PAGE_SIZE),
            current_page: 1,
            source,
            dirty: true,
        };
        (state, request)
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> i64 {
        self.current_page
    }

    pub fn fetch_state(&self) -> &FetchState {
        self.source.state()
    }

    pub fn source(&self) -> &DataSource {
        &self.source
    }

    /// Returns whether a redraw is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn view(&self) -> AppViewModel {
        let fetch = self.source.state();
        let hits = &fetch.data.hits;

        let body = if fetch.is_loading {
            Body::Loading
        } else if hits.is_empty() {
            Body::List(Vec::new())
        } else {
            Body::List(
                page_slice(hits, self.current_page, self.page_size)
                    .iter()
                    .map(ItemView::from)
                    .collect(),
            )
        };

        // Controls count the whole result set, not the visible page.
        let buttons = if hits.len() <= 1 {
            Vec::new()
        } else {
            page_buttons(1.0, page_count(hits.len(), self.page_size))
        };

        AppViewModel {
            query: self.query.clone(),
            page_size: self.page_size,
            current_page: self.current_page,
            show_error: fetch.is_error,
            body,
            page_buttons: buttons,
            total_hits: hits.len(),
        }
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_query(&mut self, query: String) {
        if self.query != query {
            self.query = query;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_page_size(&mut self, page_size: usize) {
        if self.page_size != page_size {
            self.page_size = page_size;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_current_page(&mut self, page: i64) {
        if self.current_page != page {
            self.current_page = page;
            self.mark_dirty();
        }
    }

    pub(crate) fn submit_search(&mut self) -> Option<FetchRequest> {
        let url = build_search_url(&self.base_url, &self.query);
        let request = self.source.set_url(url);
        if request.is_some() {
            self.mark_dirty();
        }
        request
    }

    pub(crate) fn apply_completion(
        &mut self,
        request_id: RequestId,
        result: Result<SearchResult, FetchFailure>,
    ) {
        if self.source.complete(request_id, result) {
            self.mark_dirty();
        }
    }
}
