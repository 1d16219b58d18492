//! hn_search core: pure state machine, pagination helpers and view-model.
mod data_source;
mod effect;
mod msg;
mod paging;
mod state;
mod types;
mod update;
mod view_model;

pub use data_source::{DataSource, FetchRequest, FetchState, ResponseOrdering};
pub use effect::Effect;
pub use msg::Msg;
pub use paging::{page_buttons, page_count, page_slice, MAX_BUTTON_RANGE};
pub use state::{
    build_search_url, AppState, SearchSettings, DEFAULT_BASE_URL, DEFAULT_PAGE_SIZE,
    DEFAULT_QUERY, MAX_PAGE_SIZE,
};
pub use types::{FetchFailure, Item, RequestId, SearchResult};
pub use update::{init, update};
pub use view_model::{AppViewModel, Body, ItemView};
