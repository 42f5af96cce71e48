//! Metrics collection module
//!
//! Tracks query outcomes, cache effectiveness and provider latency.

use serde::Serialize;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

/// Response time samples kept per provider
const MAX_SAMPLES: usize = 100;

/// Process-wide metrics collector
pub struct Metrics {
    total_queries: AtomicU64,
    cache_hits: AtomicU64,
    successes: AtomicU64,
    /// Failures keyed by error kind
    failures: RwLock<HashMap<&'static str, u64>>,
    /// Provider response times in ms, newest last
    response_times: RwLock<HashMap<String, VecDeque<u64>>>,
}

impl Metrics {
    /// Create a new metrics instance
    pub fn new() -> Self {
        Self {
            total_queries: AtomicU64::new(0),
            cache_hits: AtomicU64::new(0),
            successes: AtomicU64::new(0),
            failures: RwLock::new(HashMap::new()),
            response_times: RwLock::new(HashMap::new()),
        }
    }

    /// Increment total query count
    pub fn inc_query(&self) {
        self.total_queries.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_cache_hit(&self) {
        self.cache_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_success(&self) {
        self.successes.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a failed cycle
    pub fn record_failure(&self, kind: &'static str) {
        if let Ok(mut failures) = self.failures.write() {
            *failures.entry(kind).or_insert(0) += 1;
        }
    }

    /// Record provider response time
    pub fn record_response_time(&self, provider: &str, time_ms: u64) {
        if let Ok(mut times) = self.response_times.write() {
            let entry = times.entry(provider.to_string()).or_default();
            if entry.len() >= MAX_SAMPLES {
                entry.pop_front();
            }
            entry.push_back(time_ms);
        }
    }

    /// Get average response time for a provider
    pub fn get_avg_response_time(&self, provider: &str) -> Option<u64> {
        let times = self.response_times.read().ok()?;
        times.get(provider).and_then(|t| {
            if t.is_empty() {
                None
            } else {
                Some(t.iter().sum::<u64>() / t.len() as u64)
            }
        })
    }

    /// Point-in-time copy of every counter
    pub fn snapshot(&self) -> MetricsSnapshot {
        let failures: BTreeMap<String, u64> = self
            .failures
            .read()
            .map(|f| f.iter().map(|(k, v)| (k.to_string(), *v)).collect())
            .unwrap_or_default();

        let providers: Vec<String> = self
            .response_times
            .read()
            .map(|t| t.keys().cloned().collect())
            .unwrap_or_default();
        let avg_response_ms = providers
            .into_iter()
            .filter_map(|p| self.get_avg_response_time(&p).map(|avg| (p, avg)))
            .collect();

        MetricsSnapshot {
            total_queries: self.total_queries.load(Ordering::Relaxed),
            cache_hits: self.cache_hits.load(Ordering::Relaxed),
            successes: self.successes.load(Ordering::Relaxed),
            failures,
            avg_response_ms,
        }
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializable metrics view
#[derive(Debug, Clone, Default, Serialize)]
pub struct MetricsSnapshot {
    pub total_queries: u64,
    pub cache_hits: u64,
    pub successes: u64,
    pub failures: BTreeMap<String, u64>,
    pub avg_response_ms: BTreeMap<String, u64>,
}

impl MetricsSnapshot {
    pub fn total_failures(&self) -> u64 {
        self.failures.values().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics() {
        let metrics = Metrics::new();

        metrics.inc_query();
        metrics.inc_query();
        metrics.record_cache_hit();
        metrics.record_success();
        metrics.record_failure("no_results");
        metrics.record_response_time("google_cse", 100);
        metrics.record_response_time("google_cse", 300);

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.total_queries, 2);
        assert_eq!(snapshot.cache_hits, 1);
        assert_eq!(snapshot.successes, 1);
        assert_eq!(snapshot.failures.get("no_results"), Some(&1));
        assert_eq!(snapshot.total_failures(), 1);
        assert_eq!(snapshot.avg_response_ms.get("google_cse"), Some(&200));
    }

    #[test]
    fn test_response_time_window() {
        let metrics = Metrics::new();
        for _ in 0..MAX_SAMPLES {
            metrics.record_response_time("huggingface", 10);
        }
        metrics.record_response_time("huggingface", 110);

        // oldest 10 dropped, newest 110 kept
        assert_eq!(metrics.get_avg_response_time("huggingface"), Some(11));
    }
}
