//! Provider loader for building providers from configuration

use super::traits::{SearchProvider, SummaryProvider};
use super::{google, huggingface};
use crate::config::Settings;
use crate::network::HttpClient;
use anyhow::Result;
use std::sync::Arc;
use tracing::info;

/// Loader for initializing providers from configuration
pub struct ProviderLoader;

impl ProviderLoader {
    /// Create the configured search provider
    pub fn search(settings: &Settings, client: &HttpClient) -> Result<Arc<dyn SearchProvider>> {
        let provider: Arc<dyn SearchProvider> = match settings.search.provider.as_str() {
            "google_cse" | "google" => Arc::new(google::GoogleCustomSearch::new(
                client.clone(),
                &settings.search,
            )),
            other => {
                return Err(anyhow::anyhow!(
                    "Unknown search provider: {} (available: {})",
                    other,
                    Self::available_providers().join(", ")
                ));
            }
        };

        info!("Loaded search provider: {}", provider.name());
        Ok(provider)
    }

    /// Create the configured summary provider
    pub fn summarizer(
        settings: &Settings,
        client: &HttpClient,
    ) -> Result<Arc<dyn SummaryProvider>> {
        let provider: Arc<dyn SummaryProvider> = match settings.summarizer.provider.as_str() {
            "huggingface" | "hf" => Arc::new(huggingface::HuggingFaceSummarizer::new(
                client.clone(),
                &settings.summarizer,
            )),
            other => {
                return Err(anyhow::anyhow!(
                    "Unknown summary provider: {} (available: {})",
                    other,
                    Self::available_providers().join(", ")
                ));
            }
        };

        info!(
            "Loaded summary provider: {} ({})",
            provider.name(),
            settings.summarizer.model
        );
        Ok(provider)
    }

    /// Get list of available provider kinds
    pub fn available_providers() -> Vec<&'static str> {
        vec!["google_cse", "huggingface"]
    }
}
