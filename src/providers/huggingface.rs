//! Hugging Face Inference API summarization provider

use super::traits::*;
use crate::config::SummarizerSettings;
use crate::network::{HttpClient, ProviderRequest, ProviderResponse};
use crate::results::{SearchResult, SummaryOutcome, SummaryResult};
use anyhow::Result;
use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, error};

/// Hugging Face hosted summarization model
pub struct HuggingFaceSummarizer {
    client: HttpClient,
    endpoint: String,
    api_key: String,
    max_input_chars: usize,
}

impl HuggingFaceSummarizer {
    pub fn new(client: HttpClient, settings: &SummarizerSettings) -> Self {
        Self {
            client,
            endpoint: format!(
                "{}/{}",
                settings.base_url.trim_end_matches('/'),
                settings.model
            ),
            api_key: settings.api_key.clone().unwrap_or_default(),
            max_input_chars: settings.max_input_chars,
        }
    }

    /// Build the inference request for the given results
    pub fn request(&self, results: &[SearchResult]) -> ProviderRequest {
        let inputs = build_input(results, self.max_input_chars);
        ProviderRequest::post(&self.endpoint)
            .bearer(&self.api_key)
            .json(json!({ "inputs": inputs }))
    }

    /// Parse the inference response.
    ///
    /// Expected shape: `[{"summary_text": "..."}]`. Anything else that is
    /// still valid JSON means the model had nothing to say.
    pub fn response(
        &self,
        response: ProviderResponse,
        results: &[SearchResult],
    ) -> Result<SummaryOutcome> {
        if !response.is_success() {
            error!(
                "Error fetching summary: {} {} {}",
                response.status, response.status_text, response.text
            );
            return Ok(SummaryOutcome::NoAnswer);
        }

        let body: serde_json::Value = response.json()?;
        let summary = body
            .get(0)
            .and_then(|first| first.get("summary_text"))
            .and_then(|text| text.as_str())
            .filter(|text| !text.is_empty());

        match summary {
            Some(text) => Ok(SummaryOutcome::Answer(SummaryResult::from_results(
                text, results,
            ))),
            None => {
                debug!("Summary response carried no summary_text");
                Ok(SummaryOutcome::NoAnswer)
            }
        }
    }
}

/// Join all snippets with a single space and keep the first `max_chars`
/// characters. The cut ignores word boundaries.
///
/// Characters are counted as Unicode scalar values, not UTF-16 code units.
pub fn build_input(results: &[SearchResult], max_chars: usize) -> String {
    let joined = results
        .iter()
        .map(|r| r.snippet.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    match joined.char_indices().nth(max_chars) {
        Some((cut, _)) => joined[..cut].to_string(),
        None => joined,
    }
}

#[async_trait]
impl SummaryProvider for HuggingFaceSummarizer {
    fn name(&self) -> &str {
        "huggingface"
    }

    fn about(&self) -> ProviderAbout {
        ProviderAbout::new()
            .website("https://huggingface.co/inference-api")
            .official_api(true)
            .api_key_required(true)
            .results_format("JSON")
    }

    async fn fetch_summary(&self, results: &[SearchResult]) -> Result<SummaryOutcome> {
        let response = self.client.execute(self.request(results)).await?;
        self.response(response, results)
    }
}
