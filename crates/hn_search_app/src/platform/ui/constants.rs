pub const TITLE_QUERY: &str = " Search ";
pub const TITLE_PAGE_SIZE: &str = " Results per Page ";
pub const TITLE_RESULTS: &str = " Results ";
pub const TITLE_PAGES: &str = " Pages ";
pub const NOTICE_ERROR: &str = "Something went wrong ...";
pub const NOTICE_LOADING: &str = "Loading ...";
pub const HINTS: &str =
    " Tab: next field │ Enter: submit / open page │ ←/→: choose page │ ↑/↓: page size │ Esc: quit";
