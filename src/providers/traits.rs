//! Provider traits and metadata

use crate::results::{SearchOutcome, SearchResult, SummaryOutcome};
use async_trait::async_trait;

/// Source of web search results
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Provider name
    fn name(&self) -> &str;

    /// Short description of the provider
    fn about(&self) -> ProviderAbout {
        ProviderAbout::default()
    }

    /// Fetch results for a query, in provider order.
    ///
    /// Transport failures are reported as an outcome, never as a panic or
    /// an empty list.
    async fn fetch_results(&self, query: &str) -> SearchOutcome;
}

/// Condenses search results into an answer
#[async_trait]
pub trait SummaryProvider: Send + Sync {
    /// Provider name
    fn name(&self) -> &str;

    /// Short description of the provider
    fn about(&self) -> ProviderAbout {
        ProviderAbout::default()
    }

    /// Summarize the snippets of `results`.
    ///
    /// A refusal from the provider is `Ok(SummaryOutcome::NoAnswer)`; only
    /// network failures and unreadable bodies are errors.
    async fn fetch_summary(&self, results: &[SearchResult]) -> anyhow::Result<SummaryOutcome>;
}

/// Provider metadata
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct ProviderAbout {
    /// Website URL
    pub website: Option<String>,
    /// Whether it uses the official API
    pub use_official_api: bool,
    /// Whether an API key is required
    pub require_api_key: bool,
    /// Result format (JSON, XML)
    pub results: String,
}

impl ProviderAbout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn website(mut self, url: impl Into<String>) -> Self {
        self.website = Some(url.into());
        self
    }

    pub fn official_api(mut self, uses: bool) -> Self {
        self.use_official_api = uses;
        self
    }

    pub fn api_key_required(mut self, required: bool) -> Self {
        self.require_api_key = required;
        self
    }

    pub fn results_format(mut self, format: impl Into<String>) -> Self {
        self.results = format.into();
        self
    }
}
