//! # Article Service API
//!
//! Thin consumer of the Wikipedia REST v1 API: wire types, the
//! `ArticleService` trait, and the `reqwest`-backed client.

mod client;
mod types;

pub use client::{ApiError, ArticleService, RestArticleClient};
pub use types::{ArticleSummary, ImageInfo, RelatedPage, RelatedResponse};
