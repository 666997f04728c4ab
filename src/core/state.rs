//! # Application State
//!
//! Core business state for Wander. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── service: Arc<dyn ArticleService>   // remote article service
//! ├── current_query: String              // active search term (wire form)
//! ├── articles: Vec<ArticleSummary>      // fetched articles, append-only
//! ├── related: Vec<String>               // related titles, append-only
//! ├── is_loading: bool                   // a request chain is in flight
//! ├── error: Option<ErrorNotice>         // transient error banner
//! ├── generation: u64                    // in-flight request guard
//! └── status_message: String             // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::api::{ArticleService, ArticleSummary};

/// How long an error notice stays on screen before it dismisses itself.
pub const ERROR_NOTICE_TTL: Duration = Duration::from_secs(2);

/// A transient error banner. Self-dismisses [`ERROR_NOTICE_TTL`] after
/// being raised; a newer error replaces it and restarts the clock.
#[derive(Debug, Clone)]
pub struct ErrorNotice {
    pub message: String,
    pub raised_at: Instant,
}

impl ErrorNotice {
    pub fn new(message: String) -> Self {
        Self {
            message,
            raised_at: Instant::now(),
        }
    }

    pub fn expired(&self, now: Instant) -> bool {
        now.duration_since(self.raised_at) >= ERROR_NOTICE_TTL
    }
}

pub struct App {
    pub service: Arc<dyn ArticleService>,
    /// Active search term in wire form (underscores, not spaces).
    /// Empty string means no active query. Set only after a summary
    /// fetch succeeds, never before.
    pub current_query: String,
    pub articles: Vec<ArticleSummary>,
    pub related: Vec<String>,
    pub is_loading: bool,
    pub error: Option<ErrorNotice>,
    /// Bumped on every user-initiated fetch. Completion actions carry the
    /// generation they were spawned under; stale ones are dropped.
    pub generation: u64,
    pub status_message: String,
}

impl App {
    pub fn new(service: Arc<dyn ArticleService>) -> Self {
        Self {
            service,
            current_query: String::new(),
            articles: Vec::new(),
            related: Vec::new(),
            is_loading: false,
            error: None,
            generation: 0,
            status_message: String::from("Welcome to Wander!"),
        }
    }

    /// The only operation that clears query, articles and related titles
    /// together. Runs before every new user-initiated fetch so stale
    /// output cannot mix with new results.
    pub fn reset(&mut self) {
        self.current_query.clear();
        self.articles.clear();
        self.related.clear();
    }

    pub fn set_query(&mut self, query: String) {
        self.current_query = query;
    }

    pub fn add_articles(&mut self, articles: Vec<ArticleSummary>) {
        self.articles.extend(articles);
    }

    pub fn add_related(&mut self, titles: Vec<String>) {
        self.related.extend(titles);
    }

    /// The article the renderer shows. The store is append-only between
    /// resets but the flows never display more than the most recent.
    pub fn latest_article(&self) -> Option<&ArticleSummary> {
        self.articles.last()
    }
}
