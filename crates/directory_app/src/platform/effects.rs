use directory_core::{Effect, FetchFailure, Msg, Route};
use directory_engine::{ApiError, EngineEvent, EngineHandle};
use directory_logging::{directory_info, directory_warn};

/// Executes core effects against the engine and turns its events back into
/// messages. One runner lives exactly as long as the page that created it.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle) -> Self {
        Self { engine }
    }

    /// Issues backend calls. Returns the navigation requested, if any.
    pub fn enqueue(&self, effects: Vec<Effect>) -> Option<Route> {
        let mut navigation = None;
        for effect in effects {
            match effect {
                Effect::Search { token, query } => {
                    directory_info!("Search token={} query_len={}", token.value(), query.len());
                    self.engine.search(token, query);
                }
                Effect::FetchCompany { name } => {
                    directory_info!("FetchCompany name={}", name);
                    self.engine.company(name);
                }
                Effect::FetchArticles { token, params } => {
                    directory_info!(
                        "FetchArticles token={} company={} page={} category={}",
                        token.value(),
                        params.company,
                        params.page,
                        params
                            .category
                            .map(|category| category.as_str())
                            .unwrap_or("all")
                    );
                    self.engine.articles(token, params);
                }
                Effect::Navigate(route) => navigation = Some(route),
            }
        }
        navigation
    }

    pub fn poll(&self) -> Option<Msg> {
        self.engine.try_recv().map(map_event)
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::SearchCompleted { token, result } => Msg::SearchResolved {
            token,
            result: result.map_err(map_failure),
        },
        EngineEvent::CompanyCompleted { name, result } => {
            if let Err(err) = &result {
                directory_warn!("Company {} lookup failed: {}", name, err);
            }
            Msg::CompanyResolved {
                result: result.map_err(map_failure),
            }
        }
        EngineEvent::ArticlesCompleted { token, result } => Msg::ArticlesResolved {
            token,
            result: result.map_err(map_failure),
        },
    }
}

fn map_failure(err: ApiError) -> FetchFailure {
    match err {
        ApiError::NotFound => FetchFailure::NotFound,
        ApiError::HttpStatus(status) => FetchFailure::RequestFailed { status },
        other => FetchFailure::NetworkOrParse {
            message: other.to_string(),
        },
    }
}
