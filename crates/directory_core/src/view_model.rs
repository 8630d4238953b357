use crate::cards::ArticleCard;
use crate::feed::FeedPhase;
use crate::profile::{ProfilePhase, ProfileView};
use crate::reconcile::NodeId;
use crate::records::FeedParams;
use crate::route::Page;
use crate::search::SearchPhase;
use crate::AppState;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub page: Page,
    pub search: SearchPanelView,
    pub profile: Option<ProfilePanelView>,
    pub feed: Option<FeedView>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchPanelView {
    pub input: String,
    pub phase: SearchPhase,
    pub visible: bool,
    pub cards: Vec<ResultCardView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultCardView {
    pub node: NodeId,
    pub classes: Vec<&'static str>,
    pub markup: String,
    pub clickable: bool,
}

impl ResultCardView {
    pub fn class_name(&self) -> String {
        self.classes.join(" ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfilePanelView {
    pub loading: bool,
    pub profile: Option<ProfileView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedView {
    pub params: FeedParams,
    pub phase: FeedPhase,
    /// Loading overlay; cards underneath are hidden while it shows.
    pub overlay: bool,
    pub cards: Vec<ArticleCardView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleCardView {
    pub node: NodeId,
    pub classes: Vec<&'static str>,
    pub card: ArticleCard,
}

impl AppViewModel {
    pub(crate) fn project(state: &AppState, dirty: bool) -> Self {
        let search = state.search();
        let search = SearchPanelView {
            input: search.input().to_string(),
            phase: search.phase(),
            visible: search.panel_visible(),
            cards: search
                .cards()
                .slots()
                .iter()
                .map(|slot| ResultCardView {
                    node: slot.id,
                    classes: slot.item.classes(slot.placement),
                    markup: slot.item.markup(),
                    clickable: slot.item.click_target().is_some(),
                })
                .collect(),
        };

        let profile = state.profile().map(|profile| ProfilePanelView {
            loading: profile.loading(),
            profile: match profile.phase() {
                ProfilePhase::Loaded(view) => Some(view.clone()),
                ProfilePhase::Loading | ProfilePhase::Failed => None,
            },
        });

        let feed = state.feed().map(|feed| FeedView {
            params: feed.params().clone(),
            phase: feed.phase(),
            overlay: feed.overlay_visible(),
            cards: feed
                .cards()
                .slots()
                .iter()
                .map(|slot| ArticleCardView {
                    node: slot.id,
                    classes: slot.item.classes(slot.placement),
                    card: slot.item.clone(),
                })
                .collect(),
        });

        Self {
            page: state.page().clone(),
            search,
            profile,
            feed,
            dirty,
        }
    }
}
