use crate::{FeedParams, RequestToken, Route};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Search { token: RequestToken, query: String },
    FetchCompany { name: String },
    FetchArticles { token: RequestToken, params: FeedParams },
    /// Replace the current page.
    Navigate(Route),
}
