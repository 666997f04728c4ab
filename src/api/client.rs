//! HTTP client for the article service.
//!
//! Every operation is a single GET with `Accept: application/json`, one
//! attempt, no retry. Failures always surface as a typed [`ApiError`] so
//! the reducer can branch explicitly; nothing is swallowed into a
//! successful-looking payload.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};

use super::types::{ArticleSummary, RelatedResponse};

/// Errors that can occur while talking to the article service.
#[derive(Debug)]
pub enum ApiError {
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// The service returned a non-2xx status.
    Api { status: u16, message: String },
    /// The body was not JSON, or not the expected shape.
    Parse(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            ApiError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// The three read-only operations the flows need. A trait so reducer and
/// UI tests can substitute a canned service for the real one.
#[async_trait]
pub trait ArticleService: Send + Sync {
    /// Fetch a random article summary.
    async fn fetch_random_summary(&self) -> Result<ArticleSummary, ApiError>;

    /// Fetch the summary for an exact (case- and diacritic-sensitive)
    /// title. The caller normalizes spaces to underscores first.
    async fn fetch_summary(&self, title: &str) -> Result<ArticleSummary, ApiError>;

    /// Fetch the titles the service considers related to `title`.
    async fn fetch_related(&self, title: &str) -> Result<Vec<String>, ApiError>;
}

/// `ArticleService` backed by the Wikipedia REST v1 endpoints.
pub struct RestArticleClient {
    http: reqwest::Client,
    base_url: String,
}

impl RestArticleClient {
    pub fn new(base_url: String, timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self { http, base_url }
    }

    /// GET `url` and decode the JSON body as `T`.
    ///
    /// Titles are interpolated into `url` without percent-encoding, so
    /// reserved URL characters in a title are a known edge case.
    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: String) -> Result<T, ApiError> {
        debug!("GET {}", url);
        let response = self
            .http
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!("GET {} failed with HTTP {}", url, status.as_u16());
            return Err(ApiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
}

#[async_trait]
impl ArticleService for RestArticleClient {
    async fn fetch_random_summary(&self) -> Result<ArticleSummary, ApiError> {
        let summary: ArticleSummary = self
            .get_json(format!("{}/page/random/summary", self.base_url))
            .await?;
        info!("Random summary fetched: {}", summary.title);
        Ok(summary)
    }

    async fn fetch_summary(&self, title: &str) -> Result<ArticleSummary, ApiError> {
        self.get_json(format!("{}/page/summary/{}", self.base_url, title))
            .await
    }

    async fn fetch_related(&self, title: &str) -> Result<Vec<String>, ApiError> {
        let response: RelatedResponse = self
            .get_json(format!("{}/page/related/{}", self.base_url, title))
            .await?;
        Ok(response.pages.into_iter().map(|p| p.title).collect())
    }
}
