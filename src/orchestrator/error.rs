//! Query failure taxonomy

use thiserror::Error;

/// Why a query cycle failed. The display text is shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("Query cannot be empty.")]
    EmptyQuery,

    #[error("No results found. Please try a different query.")]
    NoResults,

    #[error("Sorry, I couldn't generate an answer.")]
    NoAnswer,

    /// Transport or decoding failure from the search provider
    #[error("{0}")]
    Search(String),

    /// Transport or decoding failure from the summary provider
    #[error("{0}")]
    Summarizer(String),
}

impl QueryError {
    /// Stable label used for metrics
    pub fn kind(&self) -> &'static str {
        match self {
            QueryError::EmptyQuery => "empty_query",
            QueryError::NoResults => "no_results",
            QueryError::NoAnswer => "no_answer",
            QueryError::Search(_) => "search_error",
            QueryError::Summarizer(_) => "summarizer_error",
        }
    }

    /// Whether a remote call failed, as opposed to a validation or empty result
    pub fn is_provider_failure(&self) -> bool {
        matches!(
            self,
            QueryError::NoAnswer | QueryError::Search(_) | QueryError::Summarizer(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(QueryError::EmptyQuery.to_string(), "Query cannot be empty.");
        assert_eq!(
            QueryError::NoResults.to_string(),
            "No results found. Please try a different query."
        );
        assert_eq!(
            QueryError::NoAnswer.to_string(),
            "Sorry, I couldn't generate an answer."
        );
        assert_eq!(
            QueryError::Search("connection refused".to_string()).to_string(),
            "connection refused"
        );
    }

    #[test]
    fn test_kinds() {
        assert_eq!(QueryError::NoAnswer.kind(), "no_answer");
        assert!(QueryError::Summarizer(String::new()).is_provider_failure());
        assert!(!QueryError::EmptyQuery.is_provider_failure());
    }
}
