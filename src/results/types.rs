//! Result type definitions

use serde::{Deserialize, Serialize};
use url::Url;

/// A single item returned by the search provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Content excerpt
    #[serde(default)]
    pub snippet: String,
    /// The URL of the result
    pub link: String,
    /// Page title, display only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl SearchResult {
    /// Create a new result
    pub fn new(snippet: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            snippet: snippet.into(),
            link: link.into(),
            title: None,
        }
    }

    /// Add a title to the result
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Get the hostname from the link
    pub fn hostname(&self) -> Option<String> {
        Url::parse(&self.link)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
    }
}

/// Generated answer and the links it was produced from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResult {
    pub answer: String,
    /// Links of every search result, in provider order
    pub sources: Vec<String>,
}

impl SummaryResult {
    pub fn new(answer: impl Into<String>, sources: Vec<String>) -> Self {
        Self {
            answer: answer.into(),
            sources,
        }
    }

    /// Build from an answer and the results it summarizes.
    ///
    /// Results without a link contribute nothing to `sources`.
    pub fn from_results(answer: impl Into<String>, results: &[SearchResult]) -> Self {
        let sources = results
            .iter()
            .filter(|r| !r.link.is_empty())
            .map(|r| r.link.clone())
            .collect();
        Self::new(answer, sources)
    }
}

/// Outcome of a search provider call
#[derive(Debug)]
pub enum SearchOutcome {
    /// At least one result, in provider order
    Results(Vec<SearchResult>),
    /// The provider answered but had nothing
    Empty,
    /// The call failed before a usable response arrived
    TransportError(anyhow::Error),
}

impl SearchOutcome {
    /// Wrap a result list, collapsing an empty one to `Empty`
    pub fn from_results(results: Vec<SearchResult>) -> Self {
        if results.is_empty() {
            SearchOutcome::Empty
        } else {
            SearchOutcome::Results(results)
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, SearchOutcome::Empty)
    }
}

/// Outcome of a summary provider call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryOutcome {
    Answer(SummaryResult),
    /// Provider refused or produced nothing usable
    NoAnswer,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sources_follow_result_order() {
        let results = vec![
            SearchResult::new("b", "https://b.example/2"),
            SearchResult::new("a", "https://a.example/1"),
        ];
        let summary = SummaryResult::from_results("answer", &results);
        assert_eq!(
            summary.sources,
            vec!["https://b.example/2", "https://a.example/1"]
        );
    }

    #[test]
    fn test_hostname() {
        let result = SearchResult::new("", "https://en.wikipedia.org/wiki/Paris");
        assert_eq!(result.hostname().as_deref(), Some("en.wikipedia.org"));
        assert!(SearchResult::new("", "not a url").hostname().is_none());
    }

    #[test]
    fn test_sources_skip_unlinked_results() {
        let results = vec![
            SearchResult::new("first", "https://one.example"),
            SearchResult::new("second", ""),
            SearchResult::new("third", "https://three.example"),
        ];
        let summary = SummaryResult::from_results("answer", &results);
        assert_eq!(
            summary.sources,
            vec!["https://one.example", "https://three.example"]
        );
    }

    #[test]
    fn test_outcome_from_results() {
        assert!(SearchOutcome::from_results(vec![]).is_empty());
        let outcome = SearchOutcome::from_results(vec![SearchResult::new("x", "https://x")]);
        assert!(matches!(outcome, SearchOutcome::Results(ref r) if r.len() == 1));
    }
}
