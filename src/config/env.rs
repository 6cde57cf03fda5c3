use crate::config::types::{Config, FetchConfig, SummaryConfig, UploadConfig};
use crate::config::validation::validate;
use crate::ConfigError;
use std::str::FromStr;

/// Loads the configuration from environment variables
///
/// Starts from built-in defaults and applies any environment overrides,
/// then validates the result.
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - An override was unparseable or validation failed
///
/// # Example
///
/// ```no_run
/// use frontpage::config::load_config;
///
/// let config = load_config().unwrap();
/// println!("Concurrency: {}", config.fetch.concurrent_requests);
/// ```
pub fn load_config() -> Result<Config, ConfigError> {
    let defaults = Config::default();

    let fetch = FetchConfig {
        concurrent_requests: env_or("CONCURRENT_REQUESTS", defaults.fetch.concurrent_requests)?,
        download_delay: env_or("DOWNLOAD_DELAY", defaults.fetch.download_delay)?,
        retry_times: env_or("RETRY_TIMES", defaults.fetch.retry_times)?,
        download_timeout: env_or("DOWNLOAD_TIMEOUT", defaults.fetch.download_timeout)?,
        max_redirects: defaults.fetch.max_redirects,
        max_articles: env_or("MAX_ARTICLES", defaults.fetch.max_articles)?,
    };

    let summary = SummaryConfig {
        enabled: env_bool_or("SUMMARY_ENABLED", defaults.summary.enabled)?,
        max_length: env_or("SUMMARY_MAX_LENGTH", defaults.summary.max_length)?,
        min_length: env_or("SUMMARY_MIN_LENGTH", defaults.summary.min_length)?,
        endpoint: env_string_or("SUMMARY_ENDPOINT", defaults.summary.endpoint),
        model: env_string_or("SUMMARY_MODEL", defaults.summary.model),
    };

    let upload = UploadConfig {
        enabled: env_bool_or("S3_UPLOAD_ENABLED", defaults.upload.enabled)?,
        bucket: std::env::var("S3_BUCKET_NAME").ok().filter(|s| !s.is_empty()),
        region: env_string_or("AWS_REGION", defaults.upload.region),
        key_prefix: std::env::var("S3_KEY_PREFIX")
            .ok()
            .filter(|s| !s.is_empty())
            .map(|p| p.trim_matches('/').to_string()),
    };

    let config = Config {
        fetch,
        summary,
        upload,
    };

    validate(&config)?;

    Ok(config)
}

/// Reads a parseable environment override, falling back to the default
fn env_or<T: FromStr>(var: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(var) {
        Ok(value) if !value.is_empty() => {
            value.parse().map_err(|_| ConfigError::InvalidEnvValue {
                var: var.to_string(),
                value,
            })
        }
        _ => Ok(default),
    }
}

/// Reads a boolean environment override ("true"/"false", case-insensitive)
fn env_bool_or(var: &str, default: bool) -> Result<bool, ConfigError> {
    match std::env::var(var) {
        Ok(value) if !value.is_empty() => match value.to_lowercase().as_str() {
            "true" | "1" | "yes" => Ok(true),
            "false" | "0" | "no" => Ok(false),
            _ => Err(ConfigError::InvalidEnvValue {
                var: var.to_string(),
                value,
            }),
        },
        _ => Ok(default),
    }
}

/// Reads a string environment override, falling back to the default
fn env_string_or(var: &str, default: String) -> String {
    std::env::var(var).ok().filter(|s| !s.is_empty()).unwrap_or(default)
}

/// Validates and normalizes the homepage URL from the CLI
///
/// A schemeless URL gets `https://` prepended; anything that still fails to
/// parse as an http(s) URL is rejected.
pub fn normalize_homepage_url(raw: &str) -> Result<url::Url, ConfigError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::InvalidUrl("URL cannot be empty".to_string()));
    }

    let candidate = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    };

    let parsed =
        url::Url::parse(&candidate).map_err(|e| ConfigError::InvalidUrl(e.to_string()))?;

    if parsed.host_str().is_none() {
        return Err(ConfigError::InvalidUrl(format!(
            "URL has no host: {}",
            candidate
        )));
    }

    Ok(parsed)
}
