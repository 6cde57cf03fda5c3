//! Run report
//!
//! A `scrape_summary.json` capturing what happened during the run, plus a
//! console-facing stats log.

use crate::OutputResult;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::fs;

/// File name of the run report
pub const REPORT_FILE_NAME: &str = "scrape_summary.json";

/// Summary of a completed scrape run
#[derive(Debug, Clone, Serialize)]
pub struct ScrapeReport {
    /// The homepage that was scraped
    pub homepage: String,

    /// Directory the artifacts were written to
    pub output_dir: String,

    /// When the run started
    pub started_at: DateTime<Utc>,

    /// Candidate article links found on the homepage
    pub links_found: usize,

    /// Links actually fetched (after the article cap)
    pub links_fetched: usize,

    /// Articles successfully extracted and saved
    pub articles_saved: usize,

    /// Per-article failures (fetch or extraction)
    pub failures: usize,

    /// Saved articles as a fraction of links fetched
    pub success_rate: f64,

    /// Wall-clock duration of the run in seconds
    pub elapsed_seconds: f64,
}

impl ScrapeReport {
    /// Fraction of fetched links that produced a saved article
    pub fn compute_success_rate(saved: usize, fetched: usize) -> f64 {
        if fetched == 0 {
            0.0
        } else {
            saved as f64 / fetched as f64
        }
    }

    /// Logs the run outcome at info level
    pub fn log(&self) {
        tracing::info!(
            homepage = %self.homepage,
            links_found = self.links_found,
            links_fetched = self.links_fetched,
            articles_saved = self.articles_saved,
            failures = self.failures,
            success_rate = format!("{:.0}%", self.success_rate * 100.0),
            elapsed = format!("{:.1}s", self.elapsed_seconds),
            "Scrape complete"
        );
    }
}

/// Writes the run report into the output directory
pub async fn write_report(dir: &Path, report: &ScrapeReport) -> OutputResult<PathBuf> {
    let path = dir.join(REPORT_FILE_NAME);
    let json = serde_json::to_string_pretty(report)?;
    fs::write(&path, json).await?;
    Ok(path)
}
