use crate::Item;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub query: String,
    pub page_size: usize,
    pub current_page: i64,
    /// Generic error notice, shown above the body.
    pub show_error: bool,
    pub body: Body,
    /// Page controls for the whole result set; empty when there is at most
    /// one hit.
    pub page_buttons: Vec<i64>,
    pub total_hits: usize,
}

/// Main area below the notices: either the loading notice or the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    Loading,
    List(Vec<ItemView>),
}

impl Body {
    pub fn items(&self) -> &[ItemView] {
        match self {
            Body::Loading => &[],
            Body::List(items) => items,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemView {
    pub id: String,
    pub title: String,
    pub url: String,
}

impl From<&Item> for ItemView {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id.clone(),
            title: item.title.clone(),
            url: item.url.clone(),
        }
    }
}
