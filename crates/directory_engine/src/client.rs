use std::time::Duration;

use directory_core::{Article, CompanyProfile, FeedParams};
use directory_logging::{directory_debug, directory_trace};
use futures_util::StreamExt;
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::ApiError;

#[derive(Debug, Clone)]
pub struct ClientSettings {
    /// Root of the backend, e.g. `http://127.0.0.1:6969`.
    pub base_url: String,
    pub connect_timeout: Duration,
    /// Upper bound for a whole call. A hung request fails with
    /// `ApiError::Timeout` instead of leaving the UI loading forever.
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:6969".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(15),
            max_bytes: 5 * 1024 * 1024,
        }
    }
}

/// The three backend endpoints the front end consumes.
#[async_trait::async_trait]
pub trait DirectoryApi: Send + Sync {
    /// `GET /search?query=..`
    async fn search(&self, query: &str) -> Result<Vec<String>, ApiError>;
    /// `GET /company/{name}`; 404 maps to `ApiError::NotFound`.
    async fn company(&self, name: &str) -> Result<CompanyProfile, ApiError>;
    /// `GET /articles/?company=..&page=..&category=..`
    async fn articles(&self, params: &FeedParams) -> Result<Vec<Article>, ApiError>;
}

#[derive(Deserialize)]
struct SearchResponse {
    results: Vec<String>,
}

#[derive(Deserialize)]
struct ArticlesResponse {
    articles: Vec<Article>,
}

#[derive(Debug, Clone)]
pub struct ReqwestApi {
    settings: ClientSettings,
    base_url: Url,
    client: reqwest::Client,
}

impl ReqwestApi {
    pub fn new(settings: ClientSettings) -> Result<Self, ApiError> {
        let base_url = Url::parse(&settings.base_url)
            .map_err(|err| ApiError::InvalidUrl(format!("{}: {err}", settings.base_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(settings.base_url.clone()));
        }
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ApiError::Network(err.to_string()))?;
        Ok(Self {
            settings,
            base_url,
            client,
        })
    }

    /// Appends `segments` to the base path. Each segment is percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.settings.base_url.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        directory_debug!("GET {}", url);
        let response = self.client.get(url).send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound);
        }
        if !status.is_success() {
            return Err(ApiError::HttpStatus(status.as_u16()));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(ApiError::TooLarge {
                    max_bytes: self.settings.max_bytes,
                    actual: Some(content_len),
                });
            }
        }

        let mut body = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = body.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(ApiError::TooLarge {
                    max_bytes: self.settings.max_bytes,
                    actual: Some(next_len),
                });
            }
            body.extend_from_slice(&chunk);
        }
        directory_trace!("Received {} bytes", body.len());

        serde_json::from_slice(&body).map_err(|err| ApiError::Decode(err.to_string()))
    }
}

#[async_trait::async_trait]
impl DirectoryApi for ReqwestApi {
    async fn search(&self, query: &str) -> Result<Vec<String>, ApiError> {
        let mut url = self.endpoint(&["search"])?;
        url.query_pairs_mut().append_pair("query", query);
        let response: SearchResponse = self.get_json(url).await?;
        Ok(response.results)
    }

    async fn company(&self, name: &str) -> Result<CompanyProfile, ApiError> {
        let url = self.endpoint(&["company", name])?;
        self.get_json(url).await
    }

    async fn articles(&self, params: &FeedParams) -> Result<Vec<Article>, ApiError> {
        let mut url = self.endpoint(&["articles", ""])?;
        url.query_pairs_mut().extend_pairs(params.query_pairs());
        let response: ArticlesResponse = self.get_json(url).await?;
        Ok(response.articles)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::Timeout;
    }
    ApiError::Network(err.to_string())
}
