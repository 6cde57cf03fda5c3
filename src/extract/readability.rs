//! Primary extractor: readability via `dom_smoothie`.

use crate::article::ExtractionMethod;
use crate::extract::text::clean_text;
use crate::extract::{Extracted, MIN_CONTENT_CHARS};
use dom_smoothie::{Config, Readability};

/// Runs readability extraction on the given HTML
///
/// The URL is passed through so relative links inside the document resolve
/// correctly. Returns `None` when parsing fails or the extracted body is
/// shorter than the minimum content threshold.
pub fn extract(html: &str, url: &str) -> Option<Extracted> {
    let cfg = Config {
        max_elements_to_parse: 9000,
        ..Default::default()
    };

    let mut readability = Readability::new(html, Some(url), Some(cfg)).ok()?;
    let article = readability.parse().ok()?;

    let text: String = article.text_content.into();
    let content = clean_text(&text);
    if content.len() < MIN_CONTENT_CHARS {
        return None;
    }

    let title = Some(article.title.trim().to_string()).filter(|t| !t.is_empty());
    let author = article
        .byline
        .as_deref()
        .map(|b| b.trim().to_string())
        .filter(|b| !b.is_empty() && b.len() < 100);

    Some(Extracted {
        title,
        author,
        published_date: None, // filled from metadata selectors by the caller
        content,
        method: ExtractionMethod::Readability,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article_html() -> String {
        let paragraphs: String = (0..8)
            .map(|i| {
                format!(
                    "<p>Paragraph {} of a long enough article body to satisfy the \
                     readability scorer and the minimum content threshold.</p>",
                    i
                )
            })
            .collect();
        format!(
            "<html><head><title>Readable Story</title></head>\
             <body><article><h1>Readable Story</h1>{}</article></body></html>",
            paragraphs
        )
    }

    #[test]
    fn test_extract_readable_page() {
        let result = extract(&article_html(), "https://example.com/story").unwrap();
        assert_eq!(result.method, ExtractionMethod::Readability);
        assert!(result.content.len() >= MIN_CONTENT_CHARS);
        assert!(result.title.is_some());
    }

    #[test]
    fn test_extract_rejects_thin_page() {
        let html = "<html><body><p>tiny</p></body></html>";
        assert!(extract(html, "https://example.com/x").is_none());
    }

    #[test]
    fn test_extract_never_panics_on_malformed_html() {
        let html = "<html><div><p>broken<<<<";
        let _ = extract(html, "https://example.com/x");
    }
}
