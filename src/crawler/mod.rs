//! Crawling module for Frontpage
//!
//! Contains the HTTP fetcher, the homepage link harvester, and the
//! coordinator that drives the whole scrape pipeline.

mod coordinator;
mod fetcher;
mod homepage;

pub use coordinator::{run_scrape, Coordinator, ScrapeStats};
pub use fetcher::{build_http_client, fetch_page, FetchResult};
pub use homepage::extract_hrefs;
