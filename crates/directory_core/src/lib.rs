//! Directory core: pure state machines behind the company search and
//! company page, plus the list reconciler and highlighter they share.
mod cards;
mod effect;
mod feed;
mod gate;
mod highlight;
mod msg;
mod profile;
mod reconcile;
mod records;
mod route;
mod search;
mod state;
mod update;
mod view_model;

pub use cards::{format_published_date, ArticleCard, ResultCard, UNREACHABLE_MESSAGE};
pub use effect::Effect;
pub use feed::{ArticleFeedController, ArticleRequest, FeedPhase};
pub use gate::{RequestGate, RequestToken};
pub use highlight::{escape_html, highlight};
pub use msg::Msg;
pub use profile::{CompanyProfileController, ProfilePhase, ProfileView};
pub use reconcile::{
    collapse, reconcile, CardList, CardSlot, ListOp, NodeId, Placement, ReconcileStats,
};
pub use records::{
    Article, Category, CompanyProfile, FailureVisibility, FeedParams, FetchFailure,
    UnknownCategory,
};
pub use route::{Page, Route};
pub use search::{SearchController, SearchPhase, SearchRequest};
pub use state::AppState;
pub use update::update;
pub use view_model::{
    AppViewModel, ArticleCardView, FeedView, ProfilePanelView, ResultCardView, SearchPanelView,
};
