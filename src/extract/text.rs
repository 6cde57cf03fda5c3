//! Text cleanup and date normalization helpers shared by both extractors.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

static MULTI_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]+").expect("static pattern"));
static MANY_DOTS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.{3,}").expect("static pattern"));
static MANY_DASHES: Lazy<Regex> = Lazy::new(|| Regex::new(r"-{2,}").expect("static pattern"));
static YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"20\d{2}").expect("static pattern"));

/// Cleans and normalizes extracted text
///
/// Collapses runs of horizontal whitespace, trims each line, drops blank
/// lines down to paragraph breaks, and squashes ellipsis/dash artifacts.
pub fn clean_text(text: &str) -> String {
    let mut paragraphs: Vec<String> = Vec::new();

    for line in text.lines() {
        let line = MULTI_SPACE.replace_all(line.trim(), " ").to_string();
        if line.is_empty() {
            continue;
        }
        let line = MANY_DOTS.replace_all(&line, "...").to_string();
        let line = MANY_DASHES.replace_all(&line, "--").to_string();
        paragraphs.push(line);
    }

    paragraphs.join("\n\n")
}

/// Date-only formats accepted by [`format_date`]
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%m/%d/%Y",
    "%d/%m/%Y",
    "%B %d, %Y",
    "%d %B %Y",
    "%b %d, %Y",
    "%d %b %Y",
];

/// Datetime formats accepted by [`format_date`]
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Normalizes a raw date string to `YYYY-MM-DD`
///
/// Tries RFC 3339, then a list of common datetime and date formats. As a
/// last resort a bare `20xx` year anywhere in the string yields
/// `YYYY-01-01`. Returns `None` when nothing date-like is found.
///
/// # Examples
///
/// ```
/// use frontpage::extract::format_date;
///
/// assert_eq!(format_date("2024-03-01T10:30:00Z"), Some("2024-03-01".to_string()));
/// assert_eq!(format_date("March 1, 2024"), Some("2024-03-01".to_string()));
/// assert_eq!(format_date("no date here"), None);
/// ```
pub fn format_date(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.date_naive().format("%Y-%m-%d").to_string());
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Some(dt.date().format("%Y-%m-%d").to_string());
        }
    }

    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, fmt) {
            return Some(date.format("%Y-%m-%d").to_string());
        }
    }

    // Year-only last resort, pinned to January 1st
    YEAR.find(trimmed).map(|m| format!("{}-01-01", m.as_str()))
}

/// Derives a title from the first line of content when metadata had none
///
/// Long first lines are cut back to their first sentence; implausibly short
/// or long results are discarded.
pub fn title_from_content(content: &str) -> Option<String> {
    let first_line = content.lines().next()?.trim();

    let candidate = if first_line.len() > 100 {
        first_line.split(". ").next().unwrap_or(first_line)
    } else {
        first_line
    };

    if candidate.len() > 10 && candidate.len() < 200 {
        Some(candidate.to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text_collapses_spaces() {
        assert_eq!(clean_text("a   b\t\tc"), "a b c");
    }

    #[test]
    fn test_clean_text_drops_blank_lines() {
        assert_eq!(clean_text("one\n\n\n\ntwo"), "one\n\ntwo");
    }

    #[test]
    fn test_clean_text_squashes_artifacts() {
        assert_eq!(clean_text("wait......ok----fine"), "wait...ok--fine");
    }

    #[test]
    fn test_format_date_rfc3339() {
        assert_eq!(
            format_date("2024-03-01T10:30:00+01:00"),
            Some("2024-03-01".to_string())
        );
        assert_eq!(
            format_date("2024-03-01T10:30:00Z"),
            Some("2024-03-01".to_string())
        );
    }

    #[test]
    fn test_format_date_plain_formats() {
        assert_eq!(format_date("2024-03-01"), Some("2024-03-01".to_string()));
        assert_eq!(format_date("03/01/2024"), Some("2024-03-01".to_string()));
        assert_eq!(format_date("1 March 2024"), Some("2024-03-01".to_string()));
        assert_eq!(format_date("Mar 1, 2024"), Some("2024-03-01".to_string()));
    }

    #[test]
    fn test_format_date_year_fallback() {
        assert_eq!(
            format_date("published sometime in 2023"),
            Some("2023-01-01".to_string())
        );
    }

    #[test]
    fn test_format_date_rejects_garbage() {
        assert_eq!(format_date(""), None);
        assert_eq!(format_date("yesterday"), None);
    }

    #[test]
    fn test_title_from_content() {
        assert_eq!(
            title_from_content("A Perfectly Fine Headline\nBody follows."),
            Some("A Perfectly Fine Headline".to_string())
        );
    }

    #[test]
    fn test_title_from_content_too_short() {
        assert_eq!(title_from_content("Short\nBody."), None);
    }

    #[test]
    fn test_title_from_long_first_line_uses_first_sentence() {
        let long = format!("{}. {}", "A sentence that serves as the headline of this piece", "x".repeat(120));
        let title = title_from_content(&long).unwrap();
        assert_eq!(title, "A sentence that serves as the headline of this piece");
    }
}
