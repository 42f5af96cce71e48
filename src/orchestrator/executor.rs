//! Query execution and orchestration

use super::error::QueryError;
use super::state::UiState;
use crate::cache::QueryCache;
use crate::metrics::Metrics;
use crate::providers::{SearchProvider, SummaryProvider};
use crate::results::{SearchOutcome, SearchResult, SummaryOutcome, SummaryResult};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::{watch, Mutex};
use tracing::{debug, info, warn};

/// Coordinates one query at a time across the search and summary providers
pub struct QueryOrchestrator {
    search: Arc<dyn SearchProvider>,
    summarizer: Arc<dyn SummaryProvider>,
    /// Successful results by exact query
    cache: QueryCache,
    metrics: Arc<Metrics>,
    state: watch::Sender<UiState>,
    /// Held from the loading transition to the final publish
    cycle: Mutex<()>,
}

impl QueryOrchestrator {
    /// Create an orchestrator with its own empty cache
    pub fn new(search: Arc<dyn SearchProvider>, summarizer: Arc<dyn SummaryProvider>) -> Self {
        Self::with_cache(search, summarizer, QueryCache::new())
    }

    /// Create an orchestrator around an existing cache
    pub fn with_cache(
        search: Arc<dyn SearchProvider>,
        summarizer: Arc<dyn SummaryProvider>,
        cache: QueryCache,
    ) -> Self {
        let (state, _) = watch::channel(UiState::idle());
        Self {
            search,
            summarizer,
            cache,
            metrics: Arc::new(Metrics::new()),
            state,
            cycle: Mutex::new(()),
        }
    }

    /// Current display state
    pub fn state(&self) -> UiState {
        self.state.borrow().clone()
    }

    /// Receive every state transition
    pub fn subscribe(&self) -> watch::Receiver<UiState> {
        self.state.subscribe()
    }

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    pub fn metrics(&self) -> &Arc<Metrics> {
        &self.metrics
    }

    pub fn search_provider(&self) -> &Arc<dyn SearchProvider> {
        &self.search
    }

    pub fn summary_provider(&self) -> &Arc<dyn SummaryProvider> {
        &self.summarizer
    }

    /// Answer a query.
    ///
    /// Cached answers are returned without contacting either provider.
    /// Every outcome is also published as the new [`UiState`].
    ///
    /// Empty queries and cache hits never wait for a cycle in flight; only
    /// provider round trips are serialized.
    pub async fn search(&self, query: &str) -> Result<SummaryResult, QueryError> {
        self.metrics.inc_query();

        if query.is_empty() {
            let error = QueryError::EmptyQuery;
            self.record_failure(query, &error);
            self.publish_settled(UiState::failed(query, &error));
            return Err(error);
        }

        if let Some(cached) = self.cached(query).await {
            return Ok(cached);
        }

        let _cycle = self.cycle.lock().await;

        // answered by the cycle we were queued behind
        if let Some(cached) = self.cached(query).await {
            return Ok(cached);
        }

        info!("Answering '{}'", query);
        let loading = LoadingGuard::acquire(&self.state, query);

        match self.answer(query).await {
            Ok(result) => {
                self.cache.insert(query.to_string(), result.clone()).await;
                self.metrics.record_success();
                loading.release(UiState::resolved(query, &result));
                info!(
                    "Answered '{}' from {} sources",
                    query,
                    result.sources.len()
                );
                Ok(result)
            }
            Err(error) => {
                self.record_failure(query, &error);
                loading.release(UiState::failed(query, &error));
                Err(error)
            }
        }
    }

    async fn cached(&self, query: &str) -> Option<SummaryResult> {
        let cached = self.cache.get(query).await?;
        debug!("Cache hit for '{}'", query);
        self.metrics.record_cache_hit();
        self.publish_settled(UiState::resolved(query, &cached));
        Some(cached)
    }

    /// Publish an outcome reached without a provider call.
    ///
    /// `loading` stays as it is, so a cycle in flight keeps the flag until
    /// its guard lets go.
    fn publish_settled(&self, next: UiState) {
        self.state.send_modify(|current| {
            *current = UiState {
                loading: current.loading,
                ..next
            };
        });
    }

    /// Search then summarize, without touching cache or state
    async fn answer(&self, query: &str) -> Result<SummaryResult, QueryError> {
        let results = self.retrieve(query).await?;

        let start = Instant::now();
        let outcome = self.summarizer.fetch_summary(&results).await;
        self.record_timing(self.summarizer.name(), start);

        match outcome {
            Ok(SummaryOutcome::Answer(result)) => Ok(result),
            Ok(SummaryOutcome::NoAnswer) => Err(QueryError::NoAnswer),
            Err(e) => Err(QueryError::Summarizer(format!("{:#}", e))),
        }
    }

    async fn retrieve(&self, query: &str) -> Result<Vec<SearchResult>, QueryError> {
        let start = Instant::now();
        let outcome = self.search.fetch_results(query).await;
        self.record_timing(self.search.name(), start);

        match outcome {
            SearchOutcome::Results(results) => {
                debug!(
                    "{} returned {} results for '{}'",
                    self.search.name(),
                    results.len(),
                    query
                );
                Ok(results)
            }
            SearchOutcome::Empty => Err(QueryError::NoResults),
            SearchOutcome::TransportError(e) => Err(QueryError::Search(format!("{:#}", e))),
        }
    }

    fn record_timing(&self, provider: &str, start: Instant) {
        let elapsed = start.elapsed();
        debug!("{} responded in {:?}", provider, elapsed);
        self.metrics
            .record_response_time(provider, elapsed.as_millis() as u64);
    }

    fn record_failure(&self, query: &str, error: &QueryError) {
        warn!("Query '{}' failed ({}): {}", query, error.kind(), error);
        self.metrics.record_failure(error.kind());
    }
}

/// Holds `loading = true` for the span of a cycle.
///
/// Dropping the guard without [`LoadingGuard::release`] (the caller abandoned
/// the future mid-flight) still clears the flag.
struct LoadingGuard<'a> {
    state: &'a watch::Sender<UiState>,
    released: bool,
}

impl<'a> LoadingGuard<'a> {
    fn acquire(state: &'a watch::Sender<UiState>, query: &str) -> Self {
        state.send_modify(|current| *current = current.loading(query));
        Self {
            state,
            released: false,
        }
    }

    /// Publish the final state of the cycle
    fn release(mut self, next: UiState) {
        self.released = true;
        self.state.send_replace(next);
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        if !self.released {
            warn!("Query cycle abandoned before completion");
            self.state.send_modify(|current| *current = current.settled());
        }
    }
}
