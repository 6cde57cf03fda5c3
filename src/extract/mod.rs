//! Article content extraction
//!
//! Two extractors run in sequence: readability ([`readability`]) first, and
//! the selector-heuristic pass ([`selectors`]) when readability fails or
//! returns too little text. Both produce an [`Extracted`] record.

mod readability;
mod selectors;
pub(crate) mod text;

pub use text::{clean_text, format_date, title_from_content};

use crate::article::ExtractionMethod;
use scraper::Html;

/// Minimum body length (in bytes) for an extraction to count as an article
pub const MIN_CONTENT_CHARS: usize = 100;

/// Raw extraction result, before summarization and serialization
#[derive(Debug, Clone)]
pub struct Extracted {
    /// Article headline, if one was found
    pub title: Option<String>,
    /// Byline, if one was found
    pub author: Option<String>,
    /// Published date normalized to `YYYY-MM-DD`, if one was found
    pub published_date: Option<String>,
    /// Cleaned body text
    pub content: String,
    /// Which extractor produced this record
    pub method: ExtractionMethod,
}

/// Extracts article content from a fetched page
///
/// Runs readability first. When it succeeds, missing metadata (published
/// date, title) is backfilled from selector heuristics and the content
/// itself. When readability fails, the selector extractor runs as a full
/// fallback. Returns `None` when neither extractor finds enough text.
///
/// # Arguments
///
/// * `html` - The page HTML
/// * `url` - The page URL, used by readability to resolve relative links
pub fn extract_article(html: &str, url: &str) -> Option<Extracted> {
    if let Some(mut extracted) = readability::extract(html, url) {
        let document = Html::parse_document(html);
        if extracted.published_date.is_none() {
            extracted.published_date = selectors::extract_date(&document);
        }
        if extracted.title.is_none() {
            extracted.title = selectors::extract_title(&document)
                .or_else(|| title_from_content(&extracted.content));
        }
        if extracted.author.is_none() {
            extracted.author = selectors::extract_author(&document);
        }
        return Some(extracted);
    }

    tracing::debug!(%url, "Readability extraction failed, trying selectors");

    let mut extracted = selectors::extract(html)?;
    if extracted.title.is_none() {
        extracted.title = title_from_content(&extracted.content);
    }
    Some(extracted)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn long_paragraphs(n: usize) -> String {
        (0..n)
            .map(|i| {
                format!(
                    "<p>Paragraph {} of a long enough article body to satisfy both \
                     extractors and their minimum content thresholds.</p>",
                    i
                )
            })
            .collect()
    }

    #[test]
    fn test_extract_article_prefers_readability() {
        let html = format!(
            "<html><head><title>Story Title</title></head>\
             <body><article><h1>Story Title</h1>{}</article></body></html>",
            long_paragraphs(8)
        );
        let result = extract_article(&html, "https://example.com/story").unwrap();
        assert_eq!(result.method, ExtractionMethod::Readability);
    }

    #[test]
    fn test_extract_article_backfills_date_from_metadata() {
        let html = format!(
            r#"<html><head><title>Dated Story</title>
               <meta property="article:published_time" content="2024-03-01T08:00:00Z">
               </head><body><article><h1>Dated Story</h1>{}</article></body></html>"#,
            long_paragraphs(8)
        );
        let result = extract_article(&html, "https://example.com/story").unwrap();
        assert_eq!(result.published_date, Some("2024-03-01".to_string()));
    }

    #[test]
    fn test_extract_article_nothing_extractable() {
        let html = "<html><body><p>tiny</p></body></html>";
        assert!(extract_article(html, "https://example.com/x").is_none());
    }
}
