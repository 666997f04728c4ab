//! Wire types for the Wikipedia REST v1 API.
//!
//! This module uses the service's own field names (`originalimage`,
//! `pages`) so the structs deserialize straight from the JSON bodies of
//! `random/summary`, `summary/{title}` and `related/{title}`.

use serde::Deserialize;

/// A short structured representation of an article: title, extract text,
/// and an optional lead image.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ArticleSummary {
    pub title: String,
    #[serde(default)]
    pub extract: String,
    #[serde(rename = "originalimage")]
    pub original_image: Option<ImageInfo>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ImageInfo {
    pub source: String,
}

impl ArticleSummary {
    /// URL of the lead image, if the summary carries one.
    pub fn image_source(&self) -> Option<&str> {
        self.original_image.as_ref().map(|img| img.source.as_str())
    }
}

/// Response body of `related/{title}`. Only the titles are kept; the
/// service sends full summary objects but the flows never use the rest.
#[derive(Debug, Deserialize)]
pub struct RelatedResponse {
    #[serde(default)]
    pub pages: Vec<RelatedPage>,
}

#[derive(Debug, Deserialize)]
pub struct RelatedPage {
    pub title: String,
}
