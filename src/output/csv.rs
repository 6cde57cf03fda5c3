//! Aggregated CSV output
//!
//! All articles from a run land in a single `all_articles.csv`, one row per
//! article, written once at the end of the run.

use crate::article::Article;
use crate::OutputResult;
use std::path::{Path, PathBuf};

/// File name of the aggregated CSV
pub const CSV_FILE_NAME: &str = "all_articles.csv";

/// Writes all articles to `all_articles.csv` in the given directory
///
/// Newlines inside body text are flattened to spaces so each article stays
/// on one row for spreadsheet tools that mishandle embedded newlines.
pub fn write_csv(dir: &Path, articles: &[Article]) -> OutputResult<PathBuf> {
    let path = dir.join(CSV_FILE_NAME);
    let mut writer = csv::Writer::from_path(&path)?;

    writer.write_record([
        "title",
        "url",
        "author",
        "published_date",
        "content",
        "summary",
        "word_count",
        "extraction_method",
    ])?;

    for article in articles {
        writer.write_record([
            article.title.as_deref().unwrap_or(""),
            &article.url,
            article.author.as_deref().unwrap_or(""),
            article.published_date.as_deref().unwrap_or(""),
            &flatten(&article.content),
            &article.summary.as_deref().map(flatten).unwrap_or_default(),
            &article.word_count.to_string(),
            &article.extraction_method.to_string(),
        ])?;
    }

    writer.flush().map_err(crate::OutputError::Io)?;
    tracing::info!(path = %path.display(), rows = articles.len(), "Wrote aggregated CSV");
    Ok(path)
}

fn flatten(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
