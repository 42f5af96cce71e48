//! Display state published by the orchestrator

use super::error::QueryError;
use crate::results::SummaryResult;
use serde::{Deserialize, Serialize};

/// What the display surface shows.
///
/// Each transition builds a fresh value; fields are never updated one by one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiState {
    pub query: String,
    pub answer: String,
    pub sources: Vec<String>,
    pub error_message: String,
    pub loading: bool,
}

impl UiState {
    /// State before the first query
    pub fn idle() -> Self {
        Self::default()
    }

    /// Start of a cycle: prior error cleared, prior answer kept until replaced
    pub fn loading(&self, query: &str) -> Self {
        Self {
            query: query.to_string(),
            answer: self.answer.clone(),
            sources: self.sources.clone(),
            error_message: String::new(),
            loading: true,
        }
    }

    pub fn resolved(query: &str, result: &SummaryResult) -> Self {
        Self {
            query: query.to_string(),
            answer: result.answer.clone(),
            sources: result.sources.clone(),
            error_message: String::new(),
            loading: false,
        }
    }

    pub fn failed(query: &str, error: &QueryError) -> Self {
        Self {
            query: query.to_string(),
            answer: String::new(),
            sources: Vec::new(),
            error_message: error.to_string(),
            loading: false,
        }
    }

    /// Same state with `loading` cleared, for cycles that ended without an outcome
    pub fn settled(&self) -> Self {
        Self {
            loading: false,
            ..self.clone()
        }
    }

    pub fn has_answer(&self) -> bool {
        !self.answer.is_empty() || !self.sources.is_empty()
    }

    pub fn has_error(&self) -> bool {
        !self.error_message.is_empty()
    }
}
