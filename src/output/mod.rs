//! Output artifacts for a scrape run
//!
//! A run produces three kinds of artifacts in the output directory:
//! per-article JSON files ([`json`]), one aggregated `all_articles.csv`
//! ([`csv`]), and a `scrape_summary.json` run report ([`report`]).

mod csv;
mod json;
mod report;

pub use self::csv::{write_csv, CSV_FILE_NAME};
pub use json::JsonWriter;
pub use report::{write_report, ScrapeReport, REPORT_FILE_NAME};
