//! Mini Perplexity: answers natural-language questions from the web
//!
//! A query is sent to a web search API, the result snippets are condensed by a
//! hosted summarization model, and the answer is shown with its source links.

pub mod cache;
pub mod config;
pub mod metrics;
pub mod network;
pub mod orchestrator;
pub mod providers;
pub mod results;
pub mod web;

pub use config::Settings;
pub use orchestrator::{QueryError, QueryOrchestrator, UiState};
pub use results::{SearchResult, SummaryResult};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
