//! Query result cache
//!
//! Maps the exact query string to its last successful summary. Entries never
//! expire and the cache has no size bound; it lives as long as its owner.

use crate::results::SummaryResult;
use moka::future::Cache;

/// Cache for summarized query results
#[derive(Clone)]
pub struct QueryCache {
    cache: Cache<String, SummaryResult>,
}

impl QueryCache {
    /// Create an unbounded cache without expiry
    pub fn new() -> Self {
        Self {
            cache: Cache::builder().build(),
        }
    }

    /// Get a cached result. Keys are compared byte for byte.
    pub async fn get(&self, query: &str) -> Option<SummaryResult> {
        self.cache.get(query).await
    }

    /// Store a result in cache
    pub async fn insert(&self, query: String, result: SummaryResult) {
        self.cache.insert(query, result).await;
    }

    pub fn contains(&self, query: &str) -> bool {
        self.cache.contains_key(query)
    }

    /// Get cache size.
    ///
    /// moka updates its counters lazily; run pending tasks first so the
    /// count reflects every completed insert.
    pub async fn len(&self) -> u64 {
        self.cache.run_pending_tasks().await;
        self.cache.entry_count()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new()
    }
}
