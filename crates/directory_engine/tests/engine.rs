use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use directory_core::{Article, CompanyProfile, FeedParams, RequestGate};
use directory_engine::{ApiError, DirectoryApi, EngineEvent, EngineHandle};

/// Canned backend whose search latency depends on the query.
#[derive(Default)]
struct FakeApi {
    delays: Mutex<HashMap<String, Duration>>,
}

impl FakeApi {
    fn with_delay(self, query: &str, delay: Duration) -> Self {
        self.delays.lock().unwrap().insert(query.to_string(), delay);
        self
    }
}

#[async_trait::async_trait]
impl DirectoryApi for FakeApi {
    async fn search(&self, query: &str) -> Result<Vec<String>, ApiError> {
        let delay = self.delays.lock().unwrap().get(query).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        Ok(vec![format!("{query} Inc")])
    }

    async fn company(&self, name: &str) -> Result<CompanyProfile, ApiError> {
        if name == "unknown" {
            return Err(ApiError::NotFound);
        }
        Ok(CompanyProfile {
            name: name.to_string(),
            description: None,
            industries: None,
            logo: None,
            website: None,
        })
    }

    async fn articles(&self, _params: &FeedParams) -> Result<Vec<Article>, ApiError> {
        Err(ApiError::HttpStatus(400))
    }
}

const WAIT: Duration = Duration::from_secs(5);

#[test]
fn completions_carry_their_issuing_token() {
    let api = FakeApi::default().with_delay("ac", Duration::from_millis(200));
    let engine = EngineHandle::with_api(Arc::new(api));
    let mut gate = RequestGate::new();
    let slow = gate.begin();
    let fast = gate.begin();

    engine.search(slow, "ac");
    engine.search(fast, "ace");

    let first = engine.recv_timeout(WAIT).expect("first event");
    let second = engine.recv_timeout(WAIT).expect("second event");
    assert_eq!(
        first,
        EngineEvent::SearchCompleted {
            token: fast,
            result: Ok(vec!["ace Inc".to_string()]),
        }
    );
    assert_eq!(
        second,
        EngineEvent::SearchCompleted {
            token: slow,
            result: Ok(vec!["ac Inc".to_string()]),
        }
    );
    assert!(gate.is_current(fast));
    assert!(!gate.is_current(slow));
}

#[test]
fn company_and_article_failures_are_reported() {
    let engine = EngineHandle::with_api(Arc::new(FakeApi::default()));
    let mut gate = RequestGate::new();
    let token = gate.begin();

    engine.company("unknown");
    let event = engine.recv_timeout(WAIT).expect("company event");
    assert_eq!(
        event,
        EngineEvent::CompanyCompleted {
            name: "unknown".to_string(),
            result: Err(ApiError::NotFound),
        }
    );

    engine.articles(token, FeedParams::new("Acme"));
    let event = engine.recv_timeout(WAIT).expect("articles event");
    assert_eq!(
        event,
        EngineEvent::ArticlesCompleted {
            token,
            result: Err(ApiError::HttpStatus(400)),
        }
    );
}

#[test]
fn try_recv_is_empty_before_any_command() {
    let engine = EngineHandle::with_api(Arc::new(FakeApi::default()));
    assert_eq!(engine.try_recv(), None);
}
