//! # Actions
//!
//! Everything that can happen in Wander becomes an `Action`.
//! User presses Enter? That's `Action::SubmitSearch`.
//! The summary fetch resolves? That's `Action::SearchLoaded`.
//!
//! The `update()` function takes the current state and an action, then
//! mutates the state and returns an `Effect` describing the I/O the event
//! loop should perform next. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes the flows testable without a terminal or a network: feed in
//! actions, assert on state and effects.

use std::time::Instant;

use log::{debug, info, warn};

use crate::api::{ApiError, ArticleSummary};
use crate::core::query;
use crate::core::state::{App, ErrorNotice};

/// Shown when the search input is empty after trimming.
pub const VALIDATION_ERROR: &str = "Please search a valid term.";

#[derive(Debug)]
pub enum Action {
    /// "Random article" trigger.
    FetchRandom,
    /// "Search" trigger with the raw input text.
    SubmitSearch(String),
    /// A rendered related title was opened (index into `App::related`).
    FollowRelated(usize),
    /// The random-summary fetch resolved.
    RandomLoaded {
        generation: u64,
        result: Result<ArticleSummary, ApiError>,
    },
    /// The summary fetch for a search resolved. `query` is the wire-form
    /// title the fetch was issued with.
    SearchLoaded {
        generation: u64,
        query: String,
        result: Result<ArticleSummary, ApiError>,
    },
    /// The chained related-titles fetch resolved.
    RelatedLoaded {
        generation: u64,
        result: Result<Vec<String>, ApiError>,
    },
    /// Periodic housekeeping: expires the error notice.
    Tick(Instant),
    Quit,
}

/// I/O the event loop performs after a reduction. Spawn effects carry the
/// generation the resulting completion actions must report back with.
#[derive(Debug, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    SpawnRandom { generation: u64 },
    SpawnSearch { generation: u64, query: String },
    SpawnRelated { generation: u64, query: String },
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::FetchRandom => begin_random(app),
        Action::SubmitSearch(input) => {
            let trimmed = input.trim();
            if trimmed.is_empty() {
                app.reset();
                app.is_loading = false;
                app.error = Some(ErrorNotice::new(VALIDATION_ERROR.to_string()));
                return Effect::None;
            }
            begin_search(app, query::to_wire(trimmed))
        }
        Action::FollowRelated(index) => {
            let Some(title) = app.related.get(index) else {
                warn!("FollowRelated with out-of-range index {}", index);
                return Effect::None;
            };
            // Stored titles are already wire form; normalizing again is a
            // no-op unless the service sent spaces.
            let wire_title = query::to_wire(title);
            begin_search(app, wire_title)
        }
        Action::RandomLoaded { generation, result } => {
            if generation != app.generation {
                debug!("Dropping stale RandomLoaded (gen {})", generation);
                return Effect::None;
            }
            app.is_loading = false;
            match result {
                Ok(article) => {
                    info!("Random article loaded: {}", article.title);
                    app.status_message = format!("Random article: {}", article.title);
                    app.add_articles(vec![article]);
                }
                Err(e) => fail(app, e),
            }
            Effect::None
        }
        Action::SearchLoaded {
            generation,
            query,
            result,
        } => {
            if generation != app.generation {
                debug!("Dropping stale SearchLoaded (gen {})", generation);
                return Effect::None;
            }
            match result {
                Ok(article) => {
                    info!("Summary loaded for '{}', chaining related fetch", query);
                    app.set_query(query.clone());
                    app.status_message = format!("Showing: {}", article.title);
                    app.add_articles(vec![article]);
                    // Article is on screen; the spinner stays up for the
                    // related chain.
                    Effect::SpawnRelated { generation, query }
                }
                Err(e) => {
                    app.is_loading = false;
                    app.reset();
                    fail(app, e);
                    Effect::None
                }
            }
        }
        Action::RelatedLoaded { generation, result } => {
            if generation != app.generation {
                debug!("Dropping stale RelatedLoaded (gen {})", generation);
                return Effect::None;
            }
            app.is_loading = false;
            match result {
                Ok(titles) => {
                    info!("{} related titles loaded", titles.len());
                    app.add_related(titles);
                }
                Err(e) => {
                    app.reset();
                    fail(app, e);
                }
            }
            Effect::None
        }
        Action::Tick(now) => {
            if app.error.as_ref().is_some_and(|n| n.expired(now)) {
                app.error = None;
            }
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

/// Clean-slate start of the random flow.
fn begin_random(app: &mut App) -> Effect {
    app.reset();
    app.generation += 1;
    app.is_loading = true;
    app.status_message = String::from("Fetching a random article...");
    Effect::SpawnRandom {
        generation: app.generation,
    }
}

/// Clean-slate start of the search flow. `current_query` is deliberately
/// not set here; it is set only once the summary fetch succeeds.
fn begin_search(app: &mut App, wire_title: String) -> Effect {
    app.reset();
    app.generation += 1;
    app.is_loading = true;
    app.status_message = format!("Searching for {}...", query::to_display(&wire_title));
    Effect::SpawnSearch {
        generation: app.generation,
        query: wire_title,
    }
}

fn fail(app: &mut App, error: ApiError) {
    warn!("Fetch failed: {}", error);
    app.status_message = String::from("Fetch failed");
    app.error = Some(ErrorNotice::new(error.to_string()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::ERROR_NOTICE_TTL;
    use crate::test_support::{sample_article, test_app};

    fn ok_search(app: &App, query: &str) -> Action {
        Action::SearchLoaded {
            generation: app.generation,
            query: query.to_string(),
            result: Ok(sample_article(query)),
        }
    }

    #[test]
    fn test_empty_search_shows_validation_error_without_spawning() {
        let mut app = test_app();
        app.add_articles(vec![sample_article("Old")]);

        let effect = update(&mut app, Action::SubmitSearch("   ".to_string()));

        assert_eq!(effect, Effect::None);
        assert!(app.articles.is_empty());
        assert_eq!(app.error.as_ref().unwrap().message, VALIDATION_ERROR);
        assert!(!app.is_loading);
    }

    #[test]
    fn test_submit_search_normalizes_spaces_to_underscores() {
        let mut app = test_app();
        let effect = update(&mut app, Action::SubmitSearch("Dog breeds".to_string()));
        assert_eq!(
            effect,
            Effect::SpawnSearch {
                generation: 1,
                query: "Dog_breeds".to_string()
            }
        );
        assert!(app.is_loading);
    }

    #[test]
    fn test_query_set_only_after_summary_resolves() {
        let mut app = test_app();
        update(&mut app, Action::SubmitSearch("Dog".to_string()));
        assert_eq!(app.current_query, "");

        let loaded = ok_search(&app, "Dog");
        let effect = update(&mut app, loaded);

        assert_eq!(app.current_query, "Dog");
        assert_eq!(app.articles.len(), 1);
        assert_eq!(
            effect,
            Effect::SpawnRelated {
                generation: 1,
                query: "Dog".to_string()
            }
        );
    }

    #[test]
    fn test_random_success_appends_exactly_one_article() {
        let mut app = test_app();
        let effect = update(&mut app, Action::FetchRandom);
        assert_eq!(effect, Effect::SpawnRandom { generation: 1 });

        update(
            &mut app,
            Action::RandomLoaded {
                generation: 1,
                result: Ok(sample_article("Cat")),
            },
        );

        assert_eq!(app.articles.len(), 1);
        assert_eq!(app.latest_article().unwrap().title, "Cat");
        assert!(!app.is_loading);
        // Random flow never chains a related fetch.
        assert!(app.related.is_empty());
    }

    #[test]
    fn test_search_failure_clears_results_and_raises_notice() {
        let mut app = test_app();
        update(&mut app, Action::SubmitSearch("Dog".to_string()));

        let failed = Action::SearchLoaded {
            generation: app.generation,
            query: "Dog".to_string(),
            result: Err(ApiError::Network("connection refused".to_string())),
        };
        let effect = update(&mut app, failed);

        assert_eq!(effect, Effect::None);
        assert!(app.articles.is_empty());
        assert_eq!(app.current_query, "");
        assert!(app.error.is_some());
        assert!(!app.is_loading);
    }

    #[test]
    fn test_related_failure_clears_results_and_raises_notice() {
        let mut app = test_app();
        update(&mut app, Action::SubmitSearch("Dog".to_string()));
        let loaded = ok_search(&app, "Dog");
        update(&mut app, loaded);

        let failed = Action::RelatedLoaded {
            generation: app.generation,
            result: Err(ApiError::Api {
                status: 404,
                message: "not found".to_string(),
            }),
        };
        update(&mut app, failed);

        assert!(app.articles.is_empty());
        assert!(app.related.is_empty());
        assert!(app.error.is_some());
    }

    #[test]
    fn test_related_success_appends_titles() {
        let mut app = test_app();
        update(&mut app, Action::SubmitSearch("Dog".to_string()));
        let loaded = ok_search(&app, "Dog");
        update(&mut app, loaded);

        let related = Action::RelatedLoaded {
            generation: app.generation,
            result: Ok(vec!["Dog_breeds".to_string(), "Wolf".to_string()]),
        };
        update(&mut app, related);

        assert_eq!(app.related, vec!["Dog_breeds", "Wolf"]);
        assert!(!app.is_loading);
    }

    #[test]
    fn test_follow_related_requeries_in_wire_form() {
        let mut app = test_app();
        update(&mut app, Action::SubmitSearch("Dog".to_string()));
        let loaded = ok_search(&app, "Dog");
        update(&mut app, loaded);
        let related = Action::RelatedLoaded {
            generation: app.generation,
            result: Ok(vec!["Dog_breeds".to_string()]),
        };
        update(&mut app, related);

        let effect = update(&mut app, Action::FollowRelated(0));

        assert_eq!(
            effect,
            Effect::SpawnSearch {
                generation: 2,
                query: "Dog_breeds".to_string()
            }
        );
        // Re-entry starts from a clean slate.
        assert!(app.articles.is_empty());
        assert_eq!(app.current_query, "");
    }

    #[test]
    fn test_follow_related_out_of_range_is_ignored() {
        let mut app = test_app();
        let effect = update(&mut app, Action::FollowRelated(5));
        assert_eq!(effect, Effect::None);
        assert_eq!(app.generation, 0);
    }

    #[test]
    fn test_stale_generation_results_are_dropped() {
        let mut app = test_app();
        // First trigger...
        update(&mut app, Action::FetchRandom);
        // ...immediately followed by a second before the first resolves.
        update(&mut app, Action::FetchRandom);
        assert_eq!(app.generation, 2);

        // The first chain's completion arrives late and must be ignored.
        update(
            &mut app,
            Action::RandomLoaded {
                generation: 1,
                result: Ok(sample_article("Stale")),
            },
        );
        assert!(app.articles.is_empty());
        assert!(app.is_loading);

        // The current chain's completion still lands.
        update(
            &mut app,
            Action::RandomLoaded {
                generation: 2,
                result: Ok(sample_article("Fresh")),
            },
        );
        assert_eq!(app.articles.len(), 1);
        assert_eq!(app.latest_article().unwrap().title, "Fresh");
    }

    #[test]
    fn test_tick_expires_error_notice() {
        let mut app = test_app();
        update(&mut app, Action::SubmitSearch(String::new()));
        let raised_at = app.error.as_ref().unwrap().raised_at;

        update(&mut app, Action::Tick(raised_at + ERROR_NOTICE_TTL / 2));
        assert!(app.error.is_some());

        update(&mut app, Action::Tick(raised_at + ERROR_NOTICE_TTL));
        assert!(app.error.is_none());
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
