use crate::{Article, Category, CompanyProfile, FetchFailure, RequestToken};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The page finished loading; starts the page's initial fetches.
    PageLoaded,
    /// User edited the search box (full box content).
    SearchInput(String),
    /// Enter pressed in the search box.
    SearchSubmitted,
    /// User clicked result card `index`.
    ResultClicked { index: usize },
    /// Click landed inside the search box or results panel.
    SearchFocused,
    /// Click landed outside both the search box and the results panel.
    ClickedOutside,
    /// User clicked the clear ("X") button.
    ClearClicked,
    /// User clicked the home link.
    ReturnHomeClicked,
    /// Article pager moved.
    FeedPageChanged(u32),
    /// Category dropdown changed; `None` shows all categories.
    FeedCategoryChanged(Option<Category>),
    /// Backend search completed.
    SearchResolved {
        token: RequestToken,
        result: Result<Vec<String>, FetchFailure>,
    },
    /// Backend company lookup completed.
    CompanyResolved {
        result: Result<CompanyProfile, FetchFailure>,
    },
    /// Backend article listing completed.
    ArticlesResolved {
        token: RequestToken,
        result: Result<Vec<Article>, FetchFailure>,
    },
    /// Fallback for placeholder wiring.
    NoOp,
}
