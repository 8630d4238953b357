use directory_logging::directory_debug;

use crate::feed::ArticleRequest;
use crate::search::SearchRequest;
use crate::{AppState, Effect, Msg, Route};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::PageLoaded => {
            // First paint of a fresh page.
            state.mark_dirty();
            match state.company_mut() {
                Some(company) => {
                    let name = company.profile.company().to_string();
                    let request = company.feed.load();
                    vec![Effect::FetchCompany { name }, articles_effect(request)]
                }
                None => Vec::new(),
            }
        }
        Msg::SearchInput(raw) => {
            let request = state.search_mut().input_changed(raw);
            state.mark_dirty();
            request.map(search_effect).into_iter().collect()
        }
        Msg::SearchSubmitted => navigate(state.search().submit()),
        Msg::ResultClicked { index } => navigate(state.search().activate(index)),
        Msg::SearchFocused => {
            if state.search_mut().reveal_panel() {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::ClickedOutside => {
            if state.search_mut().hide_panel() {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::ClearClicked => {
            state.search_mut().clear();
            state.mark_dirty();
            Vec::new()
        }
        Msg::ReturnHomeClicked => vec![Effect::Navigate(Route::Home)],
        Msg::FeedPageChanged(page) => {
            let request = state
                .company_mut()
                .and_then(|company| company.feed.set_page(page));
            feed_change(&mut state, request)
        }
        Msg::FeedCategoryChanged(category) => {
            let request = state
                .company_mut()
                .and_then(|company| company.feed.set_category(category));
            feed_change(&mut state, request)
        }
        Msg::SearchResolved { token, result } => {
            if state.search_mut().resolve(token, result) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::CompanyResolved { result } => {
            let Some(company) = state.company_mut() else {
                directory_debug!("Company response without a company page");
                return (state, Vec::new());
            };
            let redirect = company.profile.resolve(result);
            state.mark_dirty();
            navigate(redirect)
        }
        Msg::ArticlesResolved { token, result } => {
            let applied = state
                .company_mut()
                .is_some_and(|company| company.feed.resolve(token, result));
            if applied {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn search_effect(request: SearchRequest) -> Effect {
    Effect::Search {
        token: request.token,
        query: request.query,
    }
}

fn articles_effect(request: ArticleRequest) -> Effect {
    Effect::FetchArticles {
        token: request.token,
        params: request.params,
    }
}

fn feed_change(state: &mut AppState, request: Option<ArticleRequest>) -> Vec<Effect> {
    match request {
        Some(request) => {
            state.mark_dirty();
            vec![articles_effect(request)]
        }
        None => Vec::new(),
    }
}

fn navigate(route: Option<Route>) -> Vec<Effect> {
    route.map(Effect::Navigate).into_iter().collect()
}
