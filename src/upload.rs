//! Object storage upload
//!
//! Pushes the run's output artifacts to an S3 bucket under a timestamped
//! key prefix. Uploads are strictly best-effort: a failed upload is logged
//! and counted but never fails the run.

use crate::config::UploadConfig;
use crate::{Result, ScrapeError};
use aws_config::{BehaviorVersion, Region};
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};

/// Uploads output files to a configured S3 bucket
pub struct S3Uploader {
    client: Client,
    bucket: String,
    prefix: String,
}

impl S3Uploader {
    /// Builds an uploader from configuration
    ///
    /// Returns `None` when uploading is disabled or no bucket is set, so
    /// callers can skip the upload step entirely.
    pub async fn from_config(config: &UploadConfig) -> Option<Self> {
        if !config.enabled {
            return None;
        }
        let bucket = match &config.bucket {
            Some(bucket) if !bucket.is_empty() => bucket.clone(),
            _ => {
                tracing::warn!("S3 upload enabled but no bucket configured, skipping uploads");
                return None;
            }
        };

        let aws_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .load()
            .await;

        let prefix = config
            .key_prefix
            .clone()
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| default_prefix(Utc::now()));

        Some(Self {
            client: Client::new(&aws_config),
            bucket,
            prefix,
        })
    }

    /// The key prefix uploads will land under
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Uploads a single file, returning the object key
    pub async fn upload_file(&self, path: &Path) -> Result<String> {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| ScrapeError::Upload(format!("bad file name: {}", path.display())))?;
        let key = format!("{}/{}", self.prefix, file_name);

        let body = ByteStream::from_path(path)
            .await
            .map_err(|e| ScrapeError::Upload(e.to_string()))?;

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .content_type(content_type_for(path))
            .body(body)
            .send()
            .await
            .map_err(|e| ScrapeError::Upload(e.to_string()))?;

        tracing::debug!(bucket = %self.bucket, %key, "Uploaded file");
        Ok(key)
    }

    /// Uploads every file, logging failures, and returns the success count
    pub async fn upload_all(&self, paths: &[PathBuf]) -> usize {
        let mut uploaded = 0;
        for path in paths {
            match self.upload_file(path).await {
                Ok(_) => uploaded += 1,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Upload failed");
                }
            }
        }
        tracing::info!(
            bucket = %self.bucket,
            prefix = %self.prefix,
            uploaded,
            total = paths.len(),
            "Upload pass complete"
        );
        uploaded
    }
}

/// Default key prefix for a run starting at `now`
fn default_prefix(now: DateTime<Utc>) -> String {
    format!("articles/{}", now.format("%Y%m%d_%H%M%S"))
}

fn content_type_for(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => "application/json",
        Some("csv") => "text/csv",
        _ => "application/octet-stream",
    }
}
