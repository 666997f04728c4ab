//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use async_trait::async_trait;

use crate::api::{ApiError, ArticleService, ArticleSummary, ImageInfo};
use crate::core::state::App;

/// A no-op service for tests that drive the reducer directly and never
/// execute spawn effects.
pub struct NoopService;

#[async_trait]
impl ArticleService for NoopService {
    async fn fetch_random_summary(&self) -> Result<ArticleSummary, ApiError> {
        Err(ApiError::Network("noop".to_string()))
    }

    async fn fetch_summary(&self, _title: &str) -> Result<ArticleSummary, ApiError> {
        Err(ApiError::Network("noop".to_string()))
    }

    async fn fetch_related(&self, _title: &str) -> Result<Vec<String>, ApiError> {
        Err(ApiError::Network("noop".to_string()))
    }
}

/// Creates a test App with a NoopService.
pub fn test_app() -> App {
    App::new(Arc::new(NoopService))
}

/// A summary with a deterministic extract and image derived from `title`.
pub fn sample_article(title: &str) -> ArticleSummary {
    ArticleSummary {
        title: title.to_string(),
        extract: format!("An extract about {title}."),
        original_image: Some(ImageInfo {
            source: format!("https://example.org/{title}.jpg"),
        }),
    }
}
