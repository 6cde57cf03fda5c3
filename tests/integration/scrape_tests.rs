//! Integration tests for the scraper
//!
//! These tests use wiremock to stand up a fake news site and run the
//! full scrape cycle end-to-end.

use frontpage::config::{Config, SummaryConfig};
use frontpage::crawler::run_scrape;
use tempfile::tempdir;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Configuration with summarization disabled so no model endpoint is needed
fn test_config() -> Config {
    Config {
        summary: SummaryConfig {
            enabled: false,
            ..SummaryConfig::default()
        },
        ..Config::default()
    }
}

fn article_page(title: &str, author: &str, date: &str) -> String {
    let paragraphs: String = (0..8)
        .map(|i| {
            format!(
                "<p>Paragraph {} of this story carries enough words to clear \
                 the extraction threshold with room to spare.</p>",
                i
            )
        })
        .collect();
    format!(
        r#"<html><head>
           <title>{title}</title>
           <meta name="author" content="{author}">
           <meta property="article:published_time" content="{date}">
           </head><body><article><h1>{title}</h1>{paragraphs}</article></body></html>"#
    )
}

async fn mount_html(server: &MockServer, route: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(body, "text/html; charset=utf-8"),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_full_scrape_produces_all_artifacts() {
    let server = MockServer::start().await;

    let homepage = r#"<html><body>
        <a href="/news/2024/03/01/markets-rally-on-earnings-news">Markets</a>
        <a href="/news/2024/03/01/city-council-approves-new-budget">Budget</a>
        <a href="/category/politics">Politics section</a>
        <a href="/about">About us</a>
        <a href="https://elsewhere.example.com/news/2024/03/01/offsite-story">Offsite</a>
        </body></html>"#
        .to_string();

    mount_html(&server, "/", homepage).await;
    mount_html(
        &server,
        "/news/2024/03/01/markets-rally-on-earnings-news",
        article_page("Markets Rally on Earnings", "Jane Doe", "2024-03-01T09:00:00Z"),
    )
    .await;
    mount_html(
        &server,
        "/news/2024/03/01/city-council-approves-new-budget",
        article_page("City Council Approves New Budget", "John Smith", "2024-03-01T11:30:00Z"),
    )
    .await;

    let out = tempdir().unwrap();
    let homepage_url = Url::parse(&server.uri()).unwrap();
    let report = run_scrape(homepage_url, out.path().to_path_buf(), test_config())
        .await
        .unwrap();

    // Listing, about, and offsite links must not be fetched
    assert_eq!(report.links_found, 2);
    assert_eq!(report.articles_saved, 2);
    assert_eq!(report.failures, 0);

    // Per-article JSON named after the title slug
    let markets = out.path().join("markets-rally-on-earnings.json");
    assert!(markets.exists());
    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&markets).unwrap()).unwrap();
    assert_eq!(json["title"], "Markets Rally on Earnings");
    assert_eq!(json["author"], "Jane Doe");
    assert_eq!(json["published_date"], "2024-03-01");
    assert!(json["word_count"].as_u64().unwrap() > 50);
    assert!(json["summary"].as_str().unwrap().len() > 10);

    // Aggregated CSV with a header and one row per article
    let csv_text = std::fs::read_to_string(out.path().join("all_articles.csv")).unwrap();
    assert_eq!(csv_text.lines().count(), 3);
    assert!(csv_text.contains("City Council Approves New Budget"));

    // Run report
    let report_json: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(out.path().join("scrape_summary.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(report_json["articles_saved"], 2);
    assert_eq!(report_json["success_rate"], 1.0);
}

#[tokio::test]
async fn test_failing_article_does_not_abort_run() {
    let server = MockServer::start().await;

    let homepage = r#"<html><body>
        <a href="/news/2024/03/01/healthy-article-long-slug">Good</a>
        <a href="/news/2024/03/01/missing-article-long-slug">Gone</a>
        <a href="/news/2024/03/01/empty-article-long-slug">Empty</a>
        </body></html>"#
        .to_string();

    mount_html(&server, "/", homepage).await;
    mount_html(
        &server,
        "/news/2024/03/01/healthy-article-long-slug",
        article_page("A Healthy Article", "Jane Doe", "2024-03-01"),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/news/2024/03/01/missing-article-long-slug"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    // Fetches fine but has no extractable body
    mount_html(
        &server,
        "/news/2024/03/01/empty-article-long-slug",
        "<html><body><p>nope</p></body></html>".to_string(),
    )
    .await;

    let out = tempdir().unwrap();
    let homepage_url = Url::parse(&server.uri()).unwrap();
    let report = run_scrape(homepage_url, out.path().to_path_buf(), test_config())
        .await
        .unwrap();

    assert_eq!(report.links_fetched, 3);
    assert_eq!(report.articles_saved, 1);
    assert_eq!(report.failures, 2);
    assert!(out.path().join("a-healthy-article.json").exists());
}

#[tokio::test]
async fn test_homepage_with_no_article_links() {
    let server = MockServer::start().await;
    let homepage = r#"<html><body>
        <a href="/about">About</a>
        <a href="/contact">Contact</a>
        </body></html>"#
        .to_string();
    mount_html(&server, "/", homepage).await;

    let out = tempdir().unwrap();
    let homepage_url = Url::parse(&server.uri()).unwrap();
    let report = run_scrape(homepage_url, out.path().to_path_buf(), test_config())
        .await
        .unwrap();

    assert_eq!(report.links_found, 0);
    assert_eq!(report.articles_saved, 0);

    // Artifacts still written: header-only CSV and a report
    let csv_text = std::fs::read_to_string(out.path().join("all_articles.csv")).unwrap();
    assert_eq!(csv_text.lines().count(), 1);
    assert!(out.path().join("scrape_summary.json").exists());
}

#[tokio::test]
async fn test_summary_falls_back_when_model_unreachable() {
    let server = MockServer::start().await;
    let homepage = r#"<html><body>
        <a href="/news/2024/03/01/summarized-article-long-slug">Story</a>
        </body></html>"#
        .to_string();
    mount_html(&server, "/", homepage).await;
    mount_html(
        &server,
        "/news/2024/03/01/summarized-article-long-slug",
        article_page("A Summarized Article", "Jane Doe", "2024-03-01"),
    )
    .await;

    let mut config = test_config();
    config.summary.enabled = true;
    config.summary.endpoint = "http://127.0.0.1:1".to_string();

    let out = tempdir().unwrap();
    let homepage_url = Url::parse(&server.uri()).unwrap();
    let report = run_scrape(homepage_url, out.path().to_path_buf(), config)
        .await
        .unwrap();

    assert_eq!(report.articles_saved, 1);
    let json: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(out.path().join("a-summarized-article.json")).unwrap(),
    )
    .unwrap();
    assert!(!json["summary"].as_str().unwrap().is_empty());
}
