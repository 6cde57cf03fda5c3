//! The article record produced by a scrape
//!
//! An [`Article`] is created once per successfully extracted page, serialized
//! to its own JSON file and one CSV row, and never mutated afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which extractor in the fallback chain produced the article body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionMethod {
    /// Primary readability extraction
    Readability,
    /// Secondary CSS-selector heuristics
    Selectors,
}

impl std::fmt::Display for ExtractionMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Readability => write!(f, "readability"),
            Self::Selectors => write!(f, "selectors"),
        }
    }
}

/// A single scraped article
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    /// Article headline (may be empty if no extractor found one)
    pub title: Option<String>,

    /// The article URL after any redirects
    pub url: String,

    /// Byline, if detected
    pub author: Option<String>,

    /// Publication date normalized to YYYY-MM-DD
    pub published_date: Option<String>,

    /// Extracted body text
    pub content: String,

    /// Generated or extractive summary, if summarization ran
    pub summary: Option<String>,

    /// Whitespace-separated word count of the body
    pub word_count: usize,

    /// Which extractor produced the body
    pub extraction_method: ExtractionMethod,

    /// When the article was scraped
    pub scraped_at: DateTime<Utc>,
}

impl Article {
    /// Builds an article from extracted fields, filling in derived values
    pub fn new(
        url: String,
        title: Option<String>,
        author: Option<String>,
        published_date: Option<String>,
        content: String,
        extraction_method: ExtractionMethod,
    ) -> Self {
        let word_count = content.split_whitespace().count();
        Self {
            title,
            url,
            author,
            published_date,
            content,
            summary: None,
            word_count,
            extraction_method,
            scraped_at: Utc::now(),
        }
    }
}
