//! Secondary extractor: CSS selector heuristics via `scraper`.
//!
//! Used when readability extraction fails or comes back thin. The selector
//! lists are ordered by specificity; the first hit that passes the length
//! sanity checks wins.

use crate::article::ExtractionMethod;
use crate::extract::text::{clean_text, format_date};
use crate::extract::{Extracted, MIN_CONTENT_CHARS};
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

/// Title selectors in order of preference
const TITLE_SELECTORS: &[&str] = &[
    "h1.article-title",
    "h1.entry-title",
    "h1.post-title",
    "h1.headline",
    "h1[itemprop='headline']",
    ".article-header h1",
    ".entry-header h1",
    ".post-header h1",
    "article h1",
    "h1",
];

/// Author selectors; meta `content` attributes are preferred over text
const AUTHOR_SELECTORS: &[&str] = &[
    "[itemprop='author']",
    "meta[name='author']",
    ".author",
    ".byline",
    ".by-author",
    ".article-author",
    ".post-author",
    ".entry-author",
    "[rel='author']",
];

/// Published-date selectors; `datetime`/`content` attributes win over text
const DATE_SELECTORS: &[&str] = &[
    "time[datetime]",
    "[itemprop='datePublished']",
    "meta[property='article:published_time']",
    "meta[name='article:published_time']",
    ".published-date",
    ".publish-date",
    ".article-date",
    ".post-date",
    ".entry-date",
];

/// Content container selectors, most specific first
const CONTENT_SELECTORS: &[&str] = &[
    "article .entry-content",
    "article .post-content",
    "article .article-content",
    ".entry-content",
    ".post-content",
    ".article-content",
    ".article-body",
    ".post-body",
    "[itemprop='articleBody']",
    "article",
    ".content",
    "main",
];

static SITE_NAME_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*[-|]\s*[^-|]*$").expect("static pattern"));

/// Runs the selector-heuristic extractor on the given HTML
///
/// Returns `None` when no content container yields enough body text.
pub fn extract(html: &str) -> Option<Extracted> {
    let document = Html::parse_document(html);

    let content = extract_content(&document)?;
    if content.len() < MIN_CONTENT_CHARS {
        return None;
    }

    Some(Extracted {
        title: extract_title(&document),
        author: extract_author(&document),
        published_date: extract_date(&document),
        content,
        method: ExtractionMethod::Selectors,
    })
}

/// Extracts the page title using heuristic selectors
pub fn extract_title(document: &Html) -> Option<String> {
    for selector_str in TITLE_SELECTORS {
        if let Ok(selector) = Selector::parse(selector_str) {
            if let Some(element) = document.select(&selector).next() {
                let title = element_text(&element);
                if title.len() > 5 {
                    return Some(title);
                }
            }
        }
    }

    // Fall back to <title>, stripping a trailing " - Site Name" style suffix
    if let Ok(selector) = Selector::parse("title") {
        if let Some(element) = document.select(&selector).next() {
            let raw = element_text(&element);
            let stripped = SITE_NAME_SUFFIX.replace(&raw, "").trim().to_string();
            let title = if stripped.len() > 5 { stripped } else { raw };
            if title.len() > 5 {
                return Some(title);
            }
        }
    }

    None
}

/// Extracts the byline using heuristic selectors
pub fn extract_author(document: &Html) -> Option<String> {
    for selector_str in AUTHOR_SELECTORS {
        if let Ok(selector) = Selector::parse(selector_str) {
            for element in document.select(&selector) {
                let author = element
                    .value()
                    .attr("content")
                    .map(|c| c.trim().to_string())
                    .filter(|c| !c.is_empty())
                    .unwrap_or_else(|| element_text(&element));
                if !author.is_empty() && author.len() < 100 {
                    return Some(author);
                }
            }
        }
    }
    None
}

/// Extracts and normalizes the published date using heuristic selectors
pub fn extract_date(document: &Html) -> Option<String> {
    for selector_str in DATE_SELECTORS {
        if let Ok(selector) = Selector::parse(selector_str) {
            for element in document.select(&selector) {
                let raw = element
                    .value()
                    .attr("datetime")
                    .or_else(|| element.value().attr("content"))
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| element_text(&element));
                if let Some(date) = format_date(&raw) {
                    return Some(date);
                }
            }
        }
    }
    None
}

/// Extracts body text by harvesting paragraphs from content containers
fn extract_content(document: &Html) -> Option<String> {
    let paragraph_selector = Selector::parse("p").ok()?;

    for selector_str in CONTENT_SELECTORS {
        if let Ok(selector) = Selector::parse(selector_str) {
            if let Some(container) = document.select(&selector).next() {
                let parts: Vec<String> = container
                    .select(&paragraph_selector)
                    .map(|p| element_text(&p))
                    .filter(|t| t.len() > 20)
                    .collect();

                if !parts.is_empty() {
                    let content = clean_text(&parts.join("\n\n"));
                    if content.len() > MIN_CONTENT_CHARS {
                        return Some(content);
                    }
                }
            }
        }
    }

    // Last resort: every paragraph on the page, with stricter thresholds
    let parts: Vec<String> = document
        .select(&paragraph_selector)
        .map(|p| element_text(&p))
        .filter(|t| t.len() > 30)
        .collect();

    if !parts.is_empty() {
        let content = clean_text(&parts.join("\n\n"));
        if content.len() > 200 {
            return Some(content);
        }
    }

    None
}

/// Collects an element's text with whitespace collapsed
fn element_text(element: &ElementRef) -> String {
    element
        .text()
        .collect::<Vec<_>>()
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
