//! Scrape coordinator
//!
//! Drives a full run: homepage fetch, link filtering, concurrent article
//! processing, output artifacts, and the optional upload pass. A failure on
//! any single article is logged and counted; only homepage-level failures
//! abort the run.

use crate::article::Article;
use crate::config::Config;
use crate::crawler::fetcher::{build_http_client, fetch_page, FetchResult};
use crate::crawler::homepage::extract_hrefs;
use crate::extract::extract_article;
use crate::links::suggest_article_links;
use crate::output::{write_csv, write_report, JsonWriter, ScrapeReport};
use crate::summarize::SummaryEngine;
use crate::upload::S3Uploader;
use crate::{Result, ScrapeError};
use chrono::{DateTime, Utc};
use futures::stream::{self, StreamExt};
use reqwest::Client;
use std::path::PathBuf;
use std::time::Instant;
use url::Url;

/// Counters accumulated over a run
#[derive(Debug, Default, Clone, Copy)]
pub struct ScrapeStats {
    /// Candidate article links found on the homepage
    pub links_found: usize,
    /// Links fetched after the article cap was applied
    pub links_fetched: usize,
    /// Articles extracted and written successfully
    pub articles_saved: usize,
    /// Per-article failures of any kind
    pub failures: usize,
}

impl ScrapeStats {
    fn into_report(
        self,
        homepage: String,
        output_dir: String,
        started_at: DateTime<Utc>,
        elapsed_seconds: f64,
    ) -> ScrapeReport {
        ScrapeReport {
            homepage,
            output_dir,
            started_at,
            links_found: self.links_found,
            links_fetched: self.links_fetched,
            articles_saved: self.articles_saved,
            failures: self.failures,
            success_rate: ScrapeReport::compute_success_rate(
                self.articles_saved,
                self.links_fetched,
            ),
            elapsed_seconds,
        }
    }
}

/// Owns the pieces of a scrape run
pub struct Coordinator {
    config: Config,
    client: Client,
    homepage: Url,
    out_dir: PathBuf,
}

impl Coordinator {
    /// Creates a coordinator for one homepage scrape
    pub fn new(homepage: Url, out_dir: PathBuf, config: Config) -> Result<Self> {
        let client = build_http_client(&config.fetch)?;
        Ok(Self {
            config,
            client,
            homepage,
            out_dir,
        })
    }

    /// Runs the scrape end to end and returns the run report
    pub async fn run(&self) -> Result<ScrapeReport> {
        let started_at = Utc::now();
        let timer = Instant::now();
        let mut stats = ScrapeStats::default();

        tracing::info!(homepage = %self.homepage, "Starting scrape");

        let body = self.fetch_homepage().await?;
        let hrefs = extract_hrefs(&body);
        let mut links = suggest_article_links(&self.homepage, &hrefs);
        stats.links_found = links.len();

        let cap = self.config.fetch.max_articles as usize;
        if cap > 0 && links.len() > cap {
            tracing::info!(cap, found = links.len(), "Capping article count");
            links.truncate(cap);
        }
        stats.links_fetched = links.len();

        let engine = SummaryEngine::new(self.config.summary.clone());
        let mut writer = JsonWriter::new(&self.out_dir).await?;

        let concurrency = self.config.fetch.concurrent_requests.max(1) as usize;
        let processed: Vec<Option<Article>> = stream::iter(links)
            .map(|url| self.process_article(url, &engine))
            .buffer_unordered(concurrency)
            .collect()
            .await;

        let mut articles: Vec<Article> = Vec::new();
        let mut artifact_paths: Vec<PathBuf> = Vec::new();

        for result in processed {
            let Some(article) = result else {
                stats.failures += 1;
                continue;
            };
            match writer.write_article(&article).await {
                Ok(path) => {
                    artifact_paths.push(path);
                    articles.push(article);
                    stats.articles_saved += 1;
                }
                Err(e) => {
                    tracing::warn!(url = %article.url, error = %e, "Failed to write article");
                    stats.failures += 1;
                }
            }
        }

        artifact_paths.push(write_csv(&self.out_dir, &articles)?);

        let report = stats.into_report(
            self.homepage.to_string(),
            self.out_dir.display().to_string(),
            started_at,
            timer.elapsed().as_secs_f64(),
        );
        artifact_paths.push(write_report(&self.out_dir, &report).await?);

        if let Some(uploader) = S3Uploader::from_config(&self.config.upload).await {
            uploader.upload_all(&artifact_paths).await;
        }

        report.log();
        Ok(report)
    }

    /// Fetches the homepage; any failure here aborts the run
    async fn fetch_homepage(&self) -> Result<String> {
        match fetch_page(&self.client, self.homepage.as_str(), &self.config.fetch).await {
            FetchResult::Success { body, .. } => Ok(body),
            FetchResult::ContentMismatch { content_type } => {
                Err(ScrapeError::HomepageNotHtml { content_type })
            }
            FetchResult::HttpError { status_code } => Err(ScrapeError::HomepageUnreachable {
                url: self.homepage.to_string(),
                message: format!("HTTP {}", status_code),
            }),
            FetchResult::NetworkError { error } => Err(ScrapeError::HomepageUnreachable {
                url: self.homepage.to_string(),
                message: error,
            }),
        }
    }

    /// Fetches, extracts, and summarizes one article
    ///
    /// Returns `None` on any failure; the cause is logged here.
    async fn process_article(&self, url: Url, engine: &SummaryEngine) -> Option<Article> {
        let result = fetch_page(&self.client, url.as_str(), &self.config.fetch).await;

        let (final_url, body) = match result {
            FetchResult::Success { final_url, body, .. } => (final_url, body),
            other => {
                tracing::warn!(%url, kind = other.kind(), "Article fetch failed");
                return None;
            }
        };

        let extracted = match extract_article(&body, &final_url) {
            Some(e) => e,
            None => {
                tracing::warn!(%url, "No article content extractable");
                return None;
            }
        };

        let mut article = Article::new(
            final_url,
            extracted.title,
            extracted.author,
            extracted.published_date,
            extracted.content,
            extracted.method,
        );
        article.summary = Some(engine.summarize(&article.content).await);

        tracing::info!(
            url = %article.url,
            words = article.word_count,
            method = %article.extraction_method,
            "Scraped article"
        );
        Some(article)
    }
}

/// Convenience wrapper that builds a [`Coordinator`] and runs it
pub async fn run_scrape(homepage: Url, out_dir: PathBuf, config: Config) -> Result<ScrapeReport> {
    Coordinator::new(homepage, out_dir, config)?.run().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SummaryConfig;
    use tempfile::tempdir;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn article_body(n: usize) -> String {
        let paragraphs: String = (0..8)
            .map(|i| {
                format!(
                    "<p>Paragraph {} of article {} with enough words to clear the \
                     extraction threshold comfortably every time.</p>",
                    i, n
                )
            })
            .collect();
        format!(
            "<html><head><title>Story {}</title></head>\
             <body><article><h1>Story {}</h1>{}</article></body></html>",
            n, n, paragraphs
        )
    }

    fn test_config() -> Config {
        Config {
            summary: SummaryConfig {
                enabled: false,
                ..SummaryConfig::default()
            },
            ..Config::default()
        }
    }

    async fn mount_html(server: &MockServer, route: &str, body: String) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_raw(body, "text/html"))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_run_scrapes_articles_and_counts_failures() {
        let server = MockServer::start().await;
        let homepage = r#"<html><body>
               <a href="/news/2024/03/01/first-long-story-slug">One</a>
               <a href="/news/2024/03/01/second-long-story-slug">Two</a>
               <a href="/news/2024/03/01/broken-long-story-slug">Broken</a>
               <a href="/category/politics">Listing</a>
               </body></html>"#
            .to_string();
        mount_html(&server, "/", homepage).await;
        mount_html(&server, "/news/2024/03/01/first-long-story-slug", article_body(1)).await;
        mount_html(&server, "/news/2024/03/01/second-long-story-slug", article_body(2)).await;
        Mock::given(method("GET"))
            .and(path("/news/2024/03/01/broken-long-story-slug"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let dir = tempdir().unwrap();
        let homepage_url = Url::parse(&server.uri()).unwrap();
        let report = run_scrape(homepage_url, dir.path().to_path_buf(), test_config())
            .await
            .unwrap();

        assert_eq!(report.links_found, 3);
        assert_eq!(report.articles_saved, 2);
        assert_eq!(report.failures, 1);
        assert!(dir.path().join("all_articles.csv").exists());
        assert!(dir.path().join("scrape_summary.json").exists());
    }

    #[tokio::test]
    async fn test_unreachable_homepage_is_fatal() {
        let config = test_config();
        let homepage = Url::parse("http://127.0.0.1:1/").unwrap();
        let dir = tempdir().unwrap();
        let result = run_scrape(homepage, dir.path().to_path_buf(), config).await;
        assert!(matches!(
            result,
            Err(ScrapeError::HomepageUnreachable { .. })
        ));
    }

    #[tokio::test]
    async fn test_non_html_homepage_is_fatal() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("{}")
                    .insert_header("content-type", "application/json"),
            )
            .mount(&server)
            .await;

        let dir = tempdir().unwrap();
        let homepage = Url::parse(&server.uri()).unwrap();
        let result = run_scrape(homepage, dir.path().to_path_buf(), test_config()).await;
        assert!(matches!(result, Err(ScrapeError::HomepageNotHtml { .. })));
    }

    #[tokio::test]
    async fn test_article_cap_applies() {
        let server = MockServer::start().await;
        let homepage = r#"<html><body>
               <a href="/news/2024/03/01/first-long-story-slug">One</a>
               <a href="/news/2024/03/01/second-long-story-slug">Two</a>
               </body></html>"#
            .to_string();
        mount_html(&server, "/", homepage).await;
        mount_html(&server, "/news/2024/03/01/first-long-story-slug", article_body(1)).await;
        mount_html(&server, "/news/2024/03/01/second-long-story-slug", article_body(2)).await;

        let mut config = test_config();
        config.fetch.max_articles = 1;

        let dir = tempdir().unwrap();
        let homepage_url = Url::parse(&server.uri()).unwrap();
        let report = run_scrape(homepage_url, dir.path().to_path_buf(), config)
            .await
            .unwrap();

        assert_eq!(report.links_found, 2);
        assert_eq!(report.links_fetched, 1);
        assert_eq!(report.articles_saved, 1);
    }
}
