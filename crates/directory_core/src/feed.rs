use directory_logging::{directory_debug, directory_warn};

use crate::cards::ArticleCard;
use crate::gate::{RequestGate, RequestToken};
use crate::reconcile::CardList;
use crate::records::{Article, Category, FailureVisibility, FeedParams, FetchFailure};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedPhase {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed,
}

/// An article-listing call the shell must issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleRequest {
    pub token: RequestToken,
    pub params: FeedParams,
}

/// Article list of the company page.
///
/// Failures only reach the log; the previous cards stay on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleFeedController {
    gate: RequestGate,
    params: FeedParams,
    phase: FeedPhase,
    cards: CardList<ArticleCard>,
}

impl ArticleFeedController {
    pub const FAILURE_VISIBILITY: FailureVisibility = FailureVisibility::LogOnly;

    pub fn new(params: FeedParams) -> Self {
        Self {
            gate: RequestGate::new(),
            params,
            phase: FeedPhase::Idle,
            cards: CardList::new(),
        }
    }

    pub fn params(&self) -> &FeedParams {
        &self.params
    }

    pub fn phase(&self) -> FeedPhase {
        self.phase
    }

    pub fn cards(&self) -> &CardList<ArticleCard> {
        &self.cards
    }

    /// Existing cards are hidden, not removed, while a fetch is running.
    pub fn overlay_visible(&self) -> bool {
        self.phase == FeedPhase::Loading
    }

    /// Starts a fetch for the current params.
    pub fn load(&mut self) -> ArticleRequest {
        let token = self.gate.begin();
        self.phase = FeedPhase::Loading;
        ArticleRequest {
            token,
            params: self.params.clone(),
        }
    }

    /// Moves to `page` (clamped to 1). Unchanged pages issue nothing.
    pub fn set_page(&mut self, page: u32) -> Option<ArticleRequest> {
        let page = page.max(1);
        if page == self.params.page {
            return None;
        }
        self.params.page = page;
        Some(self.load())
    }

    /// Switches the category filter and returns to the first page.
    pub fn set_category(&mut self, category: Option<Category>) -> Option<ArticleRequest> {
        if category == self.params.category {
            return None;
        }
        self.params.category = category;
        self.params.page = 1;
        Some(self.load())
    }

    /// Applies an article response. Returns `false` for superseded responses.
    pub fn resolve(&mut self, token: RequestToken, result: Result<Vec<Article>, FetchFailure>) -> bool {
        if !self.gate.is_current(token) {
            directory_debug!("Dropping stale article response token={}", token.value());
            return false;
        }

        match result {
            Ok(articles) => {
                let desired: Vec<ArticleCard> = articles.iter().map(ArticleCard::from).collect();
                let stats = self.cards.reconcile(&desired);
                directory_debug!(
                    "Articles for {} page {} reconciled (created={} updated={} removed={})",
                    self.params.company,
                    self.params.page,
                    stats.created,
                    stats.updated,
                    stats.removed
                );
                self.phase = FeedPhase::Ready;
            }
            Err(failure) => {
                directory_warn!(
                    "Article fetch for {} page {} failed: {}",
                    self.params.company,
                    self.params.page,
                    failure
                );
                self.phase = FeedPhase::Failed;
            }
        }
        true
    }
}
