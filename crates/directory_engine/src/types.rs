use directory_core::{Article, CompanyProfile, RequestToken};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("not found")]
    NotFound,
    #[error("http status {0}")]
    HttpStatus(u16),
    #[error("timeout")]
    Timeout,
    #[error("response too large (max {max_bytes}, actual {actual:?})")]
    TooLarge { max_bytes: u64, actual: Option<u64> },
    #[error("network error: {0}")]
    Network(String),
    #[error("decode error: {0}")]
    Decode(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    SearchCompleted {
        token: RequestToken,
        result: Result<Vec<String>, ApiError>,
    },
    CompanyCompleted {
        name: String,
        result: Result<CompanyProfile, ApiError>,
    },
    ArticlesCompleted {
        token: RequestToken,
        result: Result<Vec<Article>, ApiError>,
    },
}
