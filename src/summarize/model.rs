//! Model-backed summarizer against a local Ollama-style endpoint.

use crate::config::SummaryConfig;
use crate::summarize::Summarizer;
use anyhow::{anyhow, Context};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Generation can be slow on CPU-only hosts
const GENERATE_TIMEOUT: Duration = Duration::from_secs(120);

/// Articles are truncated to this many bytes before prompting
const MAX_INPUT_CHARS: usize = 4000;

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: String,
    stream: bool,
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
}

/// Summarizer backed by a local model server's `/api/generate` endpoint
pub struct ModelSummarizer {
    client: Client,
    endpoint: String,
    model: String,
    max_length: usize,
    min_length: usize,
}

impl ModelSummarizer {
    /// Creates a summarizer for the configured endpoint and model
    pub fn new(config: &SummaryConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(GENERATE_TIMEOUT).build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            max_length: config.max_length,
            min_length: config.min_length,
        })
    }

    fn build_prompt(&self, content: &str) -> String {
        let mut cut = content.len().min(MAX_INPUT_CHARS);
        while cut > 0 && !content.is_char_boundary(cut) {
            cut -= 1;
        }
        format!(
            "Summarize the following article in {} to {} characters. \
             Reply with the summary text only.\n\n{}",
            self.min_length,
            self.max_length,
            &content[..cut]
        )
    }
}

#[async_trait]
impl Summarizer for ModelSummarizer {
    async fn summarize(&self, content: &str) -> anyhow::Result<String> {
        let request = GenerateRequest {
            model: &self.model,
            prompt: self.build_prompt(content),
            stream: false,
        };

        let response = self
            .client
            .post(format!("{}/api/generate", self.endpoint))
            .json(&request)
            .send()
            .await
            .context("model endpoint unreachable")?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "model endpoint returned HTTP {}",
                response.status().as_u16()
            ));
        }

        let body: GenerateResponse = response
            .json()
            .await
            .context("malformed model endpoint response")?;

        let summary = body.response.trim().to_string();
        if summary.is_empty() {
            return Err(anyhow!("model returned an empty summary"));
        }

        Ok(summary)
    }
}
