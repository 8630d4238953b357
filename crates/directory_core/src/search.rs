use directory_logging::{directory_debug, directory_warn};

use crate::cards::ResultCard;
use crate::gate::{RequestGate, RequestToken};
use crate::reconcile::CardList;
use crate::records::{FailureVisibility, FetchFailure};
use crate::route::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchPhase {
    /// Box empty, panel hidden.
    #[default]
    Idle,
    Loading,
    Populated,
    Empty,
    Failed,
}

/// A search call the shell must issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub token: RequestToken,
    pub query: String,
}

/// State machine behind the search box and its results panel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchController {
    gate: RequestGate,
    phase: SearchPhase,
    input: String,
    query: String,
    panel_visible: bool,
    cards: CardList<ResultCard>,
}

impl SearchController {
    pub const FAILURE_VISIBILITY: FailureVisibility = FailureVisibility::Card;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn panel_visible(&self) -> bool {
        self.panel_visible
    }

    pub fn cards(&self) -> &CardList<ResultCard> {
        &self.cards
    }

    /// Applies the new box content. Returns the request to issue, if any.
    ///
    /// A blank box hides the panel and supersedes every in-flight search.
    pub fn input_changed(&mut self, raw: String) -> Option<SearchRequest> {
        let query = raw.trim().to_string();
        self.input = raw;

        if query.is_empty() {
            self.gate.begin();
            self.phase = SearchPhase::Idle;
            self.panel_visible = false;
            return None;
        }

        let token = self.gate.begin();
        self.query = query.clone();
        self.phase = SearchPhase::Loading;
        self.panel_visible = true;
        self.cards.collapse_to(ResultCard::Loading);
        Some(SearchRequest { token, query })
    }

    /// Applies a search response. Returns `false` when the response was
    /// superseded and dropped.
    pub fn resolve(&mut self, token: RequestToken, result: Result<Vec<String>, FetchFailure>) -> bool {
        if !self.gate.is_current(token) {
            directory_debug!("Dropping stale search response token={}", token.value());
            return false;
        }

        match result {
            Ok(names) if names.is_empty() => {
                self.phase = SearchPhase::Empty;
                self.cards.collapse_to(ResultCard::NoResults {
                    query: self.query.clone(),
                });
            }
            Ok(names) => {
                let desired: Vec<ResultCard> = names
                    .into_iter()
                    .map(|name| ResultCard::matched(name, &self.query))
                    .collect();
                let stats = self.cards.reconcile(&desired);
                directory_debug!(
                    "Search results reconciled: {} rows (created={} updated={} removed={})",
                    desired.len(),
                    stats.created,
                    stats.updated,
                    stats.removed
                );
                self.phase = SearchPhase::Populated;
            }
            Err(failure) => {
                directory_warn!("Search for `{}` failed: {}", self.query, failure);
                self.phase = SearchPhase::Failed;
                match Self::FAILURE_VISIBILITY {
                    FailureVisibility::Card => {
                        self.cards.collapse_to(ResultCard::Unreachable);
                    }
                    FailureVisibility::LogOnly => {}
                }
            }
        }
        true
    }

    /// Hides the panel without touching its cards.
    pub fn hide_panel(&mut self) -> bool {
        std::mem::replace(&mut self.panel_visible, false)
    }

    /// Shows the panel again unless the box is empty.
    pub fn reveal_panel(&mut self) -> bool {
        if self.phase == SearchPhase::Idle || self.panel_visible {
            return false;
        }
        self.panel_visible = true;
        true
    }

    /// Empties the box, removes every card and supersedes in-flight searches.
    pub fn clear(&mut self) {
        self.gate.begin();
        self.input.clear();
        self.query.clear();
        self.phase = SearchPhase::Idle;
        self.panel_visible = false;
        self.cards.clear();
    }

    /// Where a click on card `index` leads. Placeholder, empty and error
    /// cards carry no target.
    pub fn activate(&self, index: usize) -> Option<Route> {
        if !self.panel_visible {
            return None;
        }
        let slot = self.cards.get(index)?;
        slot.item.click_target().map(|name| Route::Company {
            name: name.to_string(),
        })
    }

    /// Enter key: follows the first card while the panel is visible.
    pub fn submit(&self) -> Option<Route> {
        self.activate(0)
    }
}
