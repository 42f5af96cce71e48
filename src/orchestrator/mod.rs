//! Query orchestration module
//!
//! Runs one query through validation, cache lookup, search retrieval and
//! summarization, and publishes each observable transition as a [`UiState`].

mod error;
mod executor;
mod state;

pub use error::QueryError;
pub use executor::QueryOrchestrator;
pub use state::UiState;
