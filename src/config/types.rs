use serde::Serialize;

/// Main configuration structure for Frontpage
#[derive(Debug, Clone, Serialize)]
pub struct Config {
    pub fetch: FetchConfig,
    pub summary: SummaryConfig,
    pub upload: UploadConfig,
}

/// Fetch behavior configuration
#[derive(Debug, Clone, Serialize)]
pub struct FetchConfig {
    /// Maximum number of concurrent article fetches (`CONCURRENT_REQUESTS`)
    pub concurrent_requests: u32,

    /// Delay before each request, in fractional seconds (`DOWNLOAD_DELAY`)
    pub download_delay: f64,

    /// Retries for transient failures: 5xx and timeouts (`RETRY_TIMES`)
    pub retry_times: u32,

    /// Per-request timeout in seconds (`DOWNLOAD_TIMEOUT`)
    pub download_timeout: u64,

    /// Maximum redirect hops to follow
    pub max_redirects: u32,

    /// Maximum number of articles to process; 0 means unlimited (`MAX_ARTICLES`)
    pub max_articles: u32,
}

/// Summarization configuration
#[derive(Debug, Clone, Serialize)]
pub struct SummaryConfig {
    /// Whether to attempt summarization at all (`SUMMARY_ENABLED`)
    pub enabled: bool,

    /// Maximum summary length in characters (`SUMMARY_MAX_LENGTH`)
    pub max_length: usize,

    /// Minimum summary length in characters (`SUMMARY_MIN_LENGTH`)
    pub min_length: usize,

    /// Local model server base URL (`SUMMARY_ENDPOINT`)
    pub endpoint: String,

    /// Model name passed to the endpoint (`SUMMARY_MODEL`)
    pub model: String,
}

/// Object storage upload configuration
#[derive(Debug, Clone, Serialize)]
pub struct UploadConfig {
    /// Whether to upload output artifacts (`S3_UPLOAD_ENABLED`)
    pub enabled: bool,

    /// Target bucket (`S3_BUCKET_NAME`)
    pub bucket: Option<String>,

    /// AWS region (`AWS_REGION`)
    pub region: String,

    /// Key prefix; defaults to a timestamped `articles/...` prefix at
    /// upload time when unset (`S3_KEY_PREFIX`)
    pub key_prefix: Option<String>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            concurrent_requests: 32,
            download_delay: 0.0,
            retry_times: 1,
            download_timeout: 30,
            max_redirects: 3,
            max_articles: 40,
        }
    }
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_length: 160,
            min_length: 60,
            endpoint: "http://localhost:11434".to_string(),
            model: "llama3.2".to_string(),
        }
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            bucket: None,
            region: "us-east-1".to_string(),
            key_prefix: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fetch: FetchConfig::default(),
            summary: SummaryConfig::default(),
            upload: UploadConfig::default(),
        }
    }
}
