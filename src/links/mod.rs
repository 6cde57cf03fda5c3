//! Link discovery and filtering for homepage scrapes
//!
//! This module decides which of the links found on a homepage are worth
//! fetching as articles: it resolves them against the homepage, keeps only
//! same-site links, strips tracking noise, and applies URL-shape heuristics
//! to separate articles from listing pages.

mod heuristics;
mod normalize;

pub use heuristics::looks_like_article;
pub use normalize::{clean_url, resolve_link};

use std::collections::BTreeSet;
use url::Url;

/// Filters homepage hrefs down to likely article URLs
///
/// # Steps
///
/// 1. Resolve each href against the homepage URL
/// 2. Drop links pointing off-site (host mismatch)
/// 3. Strip fragments and tracking query parameters
/// 4. Deduplicate
/// 5. Keep only URLs that [`looks_like_article`] accepts
///
/// # Arguments
///
/// * `homepage` - The homepage URL links were collected from
/// * `hrefs` - Raw href values extracted from the homepage
///
/// # Returns
///
/// Deduplicated candidate article URLs in stable (sorted) order
pub fn suggest_article_links(homepage: &Url, hrefs: &[String]) -> Vec<Url> {
    let base_host = homepage.host_str().unwrap_or_default().to_lowercase();

    // BTreeSet gives dedup and a deterministic order in one pass
    let mut candidates: BTreeSet<String> = BTreeSet::new();

    for href in hrefs {
        let resolved = match resolve_link(homepage, href) {
            Some(u) => u,
            None => continue,
        };

        let host = match resolved.host_str() {
            Some(h) => h.to_lowercase(),
            None => continue,
        };
        if host != base_host {
            continue;
        }

        let cleaned = clean_url(resolved);

        if looks_like_article(&cleaned) {
            candidates.insert(cleaned.to_string());
        }
    }

    let result: Vec<Url> = candidates
        .into_iter()
        .filter_map(|s| Url::parse(&s).ok())
        .collect();

    tracing::info!(
        total = hrefs.len(),
        kept = result.len(),
        "Filtered homepage links to article candidates"
    );

    result
}
