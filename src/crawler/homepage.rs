//! Homepage link harvesting
//!
//! Pulls raw href values out of a fetched homepage. Filtering of the
//! harvested links happens in [`crate::links`].

use scraper::{Html, Selector};

/// Extracts every `<a href>` value from an HTML document
///
/// Values are returned raw (relative hrefs included); resolution and
/// filtering are the caller's job. Anchors carrying a `download` attribute
/// are skipped.
///
/// # Arguments
///
/// * `html` - The homepage HTML
///
/// # Returns
///
/// All href attribute values found, in document order
pub fn extract_hrefs(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let mut hrefs = Vec::new();

    if let Ok(selector) = Selector::parse("a[href]") {
        for element in document.select(&selector) {
            if element.value().attr("download").is_some() {
                continue;
            }
            if let Some(href) = element.value().attr("href") {
                hrefs.push(href.to_string());
            }
        }
    }

    hrefs
}
