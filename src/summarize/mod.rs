//! Article summarization
//!
//! Summaries come from a local model endpoint when one is configured and
//! reachable ([`model`]); otherwise a naive extractive pass over the
//! article's leading sentences stands in ([`extractive`]). Short articles
//! are used verbatim. A summarization failure never fails the article.

mod extractive;
mod model;

pub use extractive::extractive_summary;
pub use model::ModelSummarizer;

use crate::config::SummaryConfig;
use async_trait::async_trait;

/// Content at or below this length is its own summary
const VERBATIM_THRESHOLD: usize = 300;

/// A strategy for producing an article summary
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Summarizes the given article body
    async fn summarize(&self, content: &str) -> anyhow::Result<String>;
}

/// Summary orchestration: model when available, extractive otherwise
pub struct SummaryEngine {
    config: SummaryConfig,
    model: Option<Box<dyn Summarizer>>,
}

impl SummaryEngine {
    /// Builds an engine from configuration
    ///
    /// When summarization is disabled, or the model client cannot be
    /// constructed, the engine falls back to extractive summaries only.
    pub fn new(config: SummaryConfig) -> Self {
        let model: Option<Box<dyn Summarizer>> = if config.enabled {
            match ModelSummarizer::new(&config) {
                Ok(m) => Some(Box::new(m)),
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to build model summarizer, using extractive fallback");
                    None
                }
            }
        } else {
            None
        };

        Self { config, model }
    }

    /// Produces a summary for the given article body
    ///
    /// Never fails: model errors are logged and the extractive fallback
    /// takes over.
    pub async fn summarize(&self, content: &str) -> String {
        let content = content.trim();
        if content.len() <= VERBATIM_THRESHOLD {
            return content.to_string();
        }

        if let Some(model) = &self.model {
            match model.summarize(content).await {
                Ok(summary) => return summary,
                Err(e) => {
                    tracing::warn!(error = %e, "Model summarization failed, using extractive fallback");
                }
            }
        }

        extractive_summary(content, self.config.max_length)
    }
}
