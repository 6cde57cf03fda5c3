//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the scraper, including:
//! - Building an HTTP client with a proper user agent string
//! - GET requests with Content-Type classification
//! - Retry logic for transient failures (5xx, timeouts)
//! - Optional per-request delay

use crate::config::FetchConfig;
use reqwest::{redirect::Policy, Client};
use std::time::Duration;

/// User-Agent sent with every request
const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (compatible; FrontpageBot/",
    env!("CARGO_PKG_VERSION"),
    ")"
);

/// Delay between retry attempts for transient failures
const RETRY_DELAY: Duration = Duration::from_secs(2);

/// Result of a fetch operation
#[derive(Debug)]
pub enum FetchResult {
    /// Successfully fetched an HTML page
    Success {
        /// Final URL after redirects
        final_url: String,
        /// HTTP status code
        status_code: u16,
        /// Page body content
        body: String,
    },

    /// Page is not HTML (Content-Type mismatch)
    ContentMismatch {
        /// The actual Content-Type received
        content_type: String,
    },

    /// Terminal HTTP error (4xx, or 5xx after retries)
    HttpError {
        /// The HTTP status code
        status_code: u16,
    },

    /// Network error (connection refused, timeout after retries, etc.)
    NetworkError {
        /// Error description
        error: String,
    },
}

impl FetchResult {
    /// Short label for logging
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Success { .. } => "success",
            Self::ContentMismatch { .. } => "content_mismatch",
            Self::HttpError { .. } => "http_error",
            Self::NetworkError { .. } => "network_error",
        }
    }
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The fetch configuration (timeouts, redirect cap)
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(config: &FetchConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(config.download_timeout))
        .connect_timeout(Duration::from_secs(10))
        .redirect(Policy::limited(config.max_redirects as usize))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL with error classification and retry for transient failures
///
/// # Retry Logic
///
/// | Condition | Action |
/// |-----------|--------|
/// | HTTP 4xx | Immediate error |
/// | HTTP 5xx | Retry up to `retry_times`, short delay |
/// | Timeout | Retry up to `retry_times`, short delay |
/// | Connection refused | Immediate error |
/// | Non-HTML Content-Type | ContentMismatch |
///
/// When `download_delay` is set, the delay is applied before every attempt.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
/// * `config` - Retry and delay settings
///
/// # Returns
///
/// A [`FetchResult`] classifying success or the type of failure
pub async fn fetch_page(client: &Client, url: &str, config: &FetchConfig) -> FetchResult {
    let mut attempts = 0;

    loop {
        if config.download_delay > 0.0 {
            tokio::time::sleep(Duration::from_secs_f64(config.download_delay)).await;
        }

        match attempt_fetch(client, url).await {
            Attempt::Done(result) => return result,
            Attempt::Transient(result) => {
                if attempts >= config.retry_times {
                    return result;
                }
                attempts += 1;
                tracing::debug!(
                    %url,
                    attempt = attempts,
                    max = config.retry_times,
                    "Transient fetch failure, retrying"
                );
                tokio::time::sleep(RETRY_DELAY).await;
            }
        }
    }
}

/// Outcome of a single fetch attempt
enum Attempt {
    /// Terminal result, return as-is
    Done(FetchResult),
    /// Worth retrying (5xx or timeout)
    Transient(FetchResult),
}

async fn attempt_fetch(client: &Client, url: &str) -> Attempt {
    match client.get(url).send().await {
        Ok(response) => {
            let status = response.status();
            let final_url = response.url().to_string();

            if status.is_server_error() {
                return Attempt::Transient(FetchResult::HttpError {
                    status_code: status.as_u16(),
                });
            }

            if !status.is_success() {
                return Attempt::Done(FetchResult::HttpError {
                    status_code: status.as_u16(),
                });
            }

            let content_type = response
                .headers()
                .get("content-type")
                .and_then(|v| v.to_str().ok())
                .unwrap_or("")
                .to_string();

            if !content_type.is_empty() && !content_type.contains("html") {
                return Attempt::Done(FetchResult::ContentMismatch { content_type });
            }

            match response.text().await {
                Ok(body) => Attempt::Done(FetchResult::Success {
                    final_url,
                    status_code: status.as_u16(),
                    body,
                }),
                Err(e) => Attempt::Done(FetchResult::NetworkError {
                    error: e.to_string(),
                }),
            }
        }
        Err(e) => {
            if e.is_timeout() {
                Attempt::Transient(FetchResult::NetworkError {
                    error: "Request timeout".to_string(),
                })
            } else if e.is_connect() {
                Attempt::Done(FetchResult::NetworkError {
                    error: "Connection refused".to_string(),
                })
            } else if e.is_redirect() {
                Attempt::Done(FetchResult::NetworkError {
                    error: "Too many redirects".to_string(),
                })
            } else {
                Attempt::Done(FetchResult::NetworkError {
                    error: e.to_string(),
                })
            }
        }
    }
}
