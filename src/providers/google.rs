//! Google Custom Search JSON API provider

use super::traits::*;
use crate::config::SearchProviderSettings;
use crate::network::{HttpClient, ProviderRequest, ProviderResponse};
use crate::results::{SearchOutcome, SearchResult};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, error};

/// Google Custom Search provider
pub struct GoogleCustomSearch {
    client: HttpClient,
    base_url: String,
    api_key: String,
    search_engine_id: String,
}

#[derive(Debug, Deserialize)]
struct CseResponse {
    #[serde(default)]
    items: Option<Vec<CseItem>>,
}

#[derive(Debug, Deserialize)]
struct CseItem {
    title: Option<String>,
    snippet: Option<String>,
    link: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CseErrorResponse {
    error: Option<CseError>,
}

#[derive(Debug, Deserialize)]
struct CseError {
    message: Option<String>,
}

impl GoogleCustomSearch {
    pub fn new(client: HttpClient, settings: &SearchProviderSettings) -> Self {
        Self {
            client,
            base_url: settings.base_url.clone(),
            // Missing credentials are sent empty and rejected by Google
            api_key: settings.api_key.clone().unwrap_or_default(),
            search_engine_id: settings.search_engine_id.clone().unwrap_or_default(),
        }
    }

    /// Build the search request; the query is URL-encoded into the URL
    pub fn request(&self, query: &str) -> ProviderRequest {
        let url = format!(
            "{}?key={}&cx={}&q={}",
            self.base_url,
            urlencoding::encode(&self.api_key),
            urlencoding::encode(&self.search_engine_id),
            urlencoding::encode(query)
        );
        ProviderRequest::get(url)
    }

    /// Parse the provider response into an outcome
    pub fn response(&self, response: ProviderResponse) -> SearchOutcome {
        if !response.is_success() {
            let detail = response
                .json::<CseErrorResponse>()
                .ok()
                .and_then(|e| e.error)
                .and_then(|e| e.message)
                .unwrap_or(response.status_text);
            return SearchOutcome::TransportError(anyhow::anyhow!(
                "Search request failed with HTTP {}: {}",
                response.status,
                detail
            ));
        }

        let parsed: CseResponse = match response.json() {
            Ok(parsed) => parsed,
            Err(e) => {
                return SearchOutcome::TransportError(
                    e.context("Malformed search response"),
                )
            }
        };

        let results: Vec<SearchResult> = parsed
            .items
            .unwrap_or_default()
            .into_iter()
            .map(|item| {
                // an unlinked item still feeds its snippet to the summarizer
                let result = SearchResult::new(
                    item.snippet.unwrap_or_default(),
                    item.link.unwrap_or_default(),
                );
                match item.title {
                    Some(title) => result.with_title(title),
                    None => result,
                }
            })
            .collect();

        debug!(
            hosts = ?results.iter().filter_map(SearchResult::hostname).collect::<Vec<_>>(),
            "Search returned {} results",
            results.len()
        );

        SearchOutcome::from_results(results)
    }
}

#[async_trait]
impl SearchProvider for GoogleCustomSearch {
    fn name(&self) -> &str {
        "google_cse"
    }

    fn about(&self) -> ProviderAbout {
        ProviderAbout::new()
            .website("https://programmablesearchengine.google.com")
            .official_api(true)
            .api_key_required(true)
            .results_format("JSON")
    }

    async fn fetch_results(&self, query: &str) -> SearchOutcome {
        match self.client.execute(self.request(query)).await {
            Ok(response) => self.response(response),
            Err(e) => {
                error!("Error fetching search results: {}", e);
                SearchOutcome::TransportError(e)
            }
        }
    }
}
