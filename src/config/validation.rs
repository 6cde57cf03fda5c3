use crate::config::types::Config;
use crate::ConfigError;

/// Validates a loaded configuration
///
/// # Rules
///
/// * `concurrent_requests` must be at least 1
/// * `download_delay` must be non-negative
/// * `download_timeout` must be at least 1 second
/// * summary `min_length` must not exceed `max_length`
/// * upload requires a bucket name when enabled
///
/// # Returns
///
/// * `Ok(())` - Configuration is valid
/// * `Err(ConfigError::Validation)` - A rule was violated
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.fetch.concurrent_requests == 0 {
        return Err(ConfigError::Validation(
            "CONCURRENT_REQUESTS must be at least 1".to_string(),
        ));
    }

    if config.fetch.download_delay < 0.0 || !config.fetch.download_delay.is_finite() {
        return Err(ConfigError::Validation(
            "DOWNLOAD_DELAY must be a non-negative number".to_string(),
        ));
    }

    if config.fetch.download_timeout == 0 {
        return Err(ConfigError::Validation(
            "DOWNLOAD_TIMEOUT must be at least 1 second".to_string(),
        ));
    }

    if config.summary.min_length > config.summary.max_length {
        return Err(ConfigError::Validation(format!(
            "SUMMARY_MIN_LENGTH ({}) exceeds SUMMARY_MAX_LENGTH ({})",
            config.summary.min_length, config.summary.max_length
        )));
    }

    if config.summary.max_length == 0 {
        return Err(ConfigError::Validation(
            "SUMMARY_MAX_LENGTH must be at least 1".to_string(),
        ));
    }

    if config.upload.enabled && config.upload.bucket.is_none() {
        return Err(ConfigError::Validation(
            "S3_UPLOAD_ENABLED is set but S3_BUCKET_NAME is missing".to_string(),
        ));
    }

    Ok(())
}
