//! Provider HTTP contract tests
//!
//! Each test points a real provider at a wiremock server and checks the
//! request it sends and how it reads the reply.

use mini_perplexity::config::{SearchProviderSettings, SummarizerSettings};
use mini_perplexity::network::HttpClient;
use mini_perplexity::providers::google::GoogleCustomSearch;
use mini_perplexity::providers::huggingface::HuggingFaceSummarizer;
use mini_perplexity::providers::{SearchProvider, SummaryProvider};
use mini_perplexity::results::{SearchOutcome, SearchResult, SummaryOutcome};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn google(server: &MockServer) -> GoogleCustomSearch {
    let settings = SearchProviderSettings {
        base_url: format!("{}/customsearch/v1", server.uri()),
        api_key: Some("test-key".to_string()),
        search_engine_id: Some("test-cx".to_string()),
        ..Default::default()
    };
    GoogleCustomSearch::new(HttpClient::new().unwrap(), &settings)
}

fn huggingface(server: &MockServer) -> HuggingFaceSummarizer {
    let settings = SummarizerSettings {
        base_url: format!("{}/models", server.uri()),
        api_key: Some("hf-token".to_string()),
        ..Default::default()
    };
    HuggingFaceSummarizer::new(HttpClient::new().unwrap(), &settings)
}

// ────────────────────────────────────────────────────────────────────────────
// Google Custom Search
// ────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_search_sends_credentials_and_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/customsearch/v1"))
        .and(query_param("key", "test-key"))
        .and(query_param("cx", "test-cx"))
        .and(query_param("q", "capital of France"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                {"title": "Paris", "snippet": "Paris is the capital of France.", "link": "https://l1.example"},
                {"title": "France", "snippet": "France's capital city is Paris.", "link": "https://l2.example"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    match google(&server).fetch_results("capital of France").await {
        SearchOutcome::Results(results) => {
            assert_eq!(results.len(), 2);
            assert_eq!(results[0].link, "https://l1.example");
            assert_eq!(results[1].snippet, "France's capital city is Paris.");
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
}

#[tokio::test]
async fn test_search_without_items_is_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/customsearch/v1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "searchInformation": {"totalResults": "0"}
        })))
        .mount(&server)
        .await;

    assert!(google(&server).fetch_results("zxqvjk").await.is_empty());
}

#[tokio::test]
async fn test_search_rejected_key_is_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/customsearch/v1"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {"code": 400, "message": "API key not valid. Please pass a valid API key."}
        })))
        .mount(&server)
        .await;

    match google(&server).fetch_results("anything").await {
        SearchOutcome::TransportError(e) => {
            assert!(e.to_string().contains("API key not valid"));
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
}

#[tokio::test]
async fn test_search_connection_refused_is_transport_error() {
    let settings = SearchProviderSettings {
        base_url: "http://127.0.0.1:1/customsearch/v1".to_string(),
        ..Default::default()
    };
    let provider = GoogleCustomSearch::new(HttpClient::new().unwrap(), &settings);

    let outcome = provider.fetch_results("anything").await;
    assert!(matches!(outcome, SearchOutcome::TransportError(_)));
}

// ────────────────────────────────────────────────────────────────────────────
// Hugging Face Inference API
// ────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_summary_request_format() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/facebook/bart-large-cnn"))
        .and(header("authorization", "Bearer hf-token"))
        .and(body_json(json!({
            "inputs": "Paris is the capital of France. France's capital city is Paris."
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{"summary_text": "Paris is the capital of France."}])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let results = vec![
        SearchResult::new("Paris is the capital of France.", "https://l1.example"),
        SearchResult::new("France's capital city is Paris.", "https://l2.example"),
    ];
    let outcome = huggingface(&server).fetch_summary(&results).await.unwrap();

    match outcome {
        SummaryOutcome::Answer(summary) => {
            assert_eq!(summary.answer, "Paris is the capital of France.");
            assert_eq!(summary.sources, vec!["https://l1.example", "https://l2.example"]);
        }
        SummaryOutcome::NoAnswer => panic!("expected an answer"),
    }
}

#[tokio::test]
async fn test_summary_input_is_truncated() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/facebook/bart-large-cnn"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"summary_text": "ok"}])))
        .mount(&server)
        .await;

    let results: Vec<SearchResult> = (0..40)
        .map(|i| {
            SearchResult::new(
                format!("snippet number {} with some words", i),
                format!("https://r{}.example", i),
            )
        })
        .collect();

    let outcome = huggingface(&server).fetch_summary(&results).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    let inputs = body["inputs"].as_str().unwrap();
    let joined = results
        .iter()
        .map(|r| r.snippet.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    assert!(joined.chars().count() > 1000);
    assert_eq!(inputs.chars().count(), 1000);
    assert!(joined.starts_with(inputs));

    // sources still cover every result, including truncated ones
    match outcome {
        SummaryOutcome::Answer(summary) => assert_eq!(summary.sources.len(), 40),
        SummaryOutcome::NoAnswer => panic!("expected an answer"),
    }
}

#[tokio::test]
async fn test_summary_error_status_is_no_answer() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/facebook/bart-large-cnn"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({
            "error": "Model facebook/bart-large-cnn is currently loading",
            "estimated_time": 20.0
        })))
        .mount(&server)
        .await;

    let results = vec![SearchResult::new("text", "https://l1.example")];
    let outcome = huggingface(&server).fetch_summary(&results).await.unwrap();
    assert_eq!(outcome, SummaryOutcome::NoAnswer);
}

#[tokio::test]
async fn test_summary_missing_text_is_no_answer() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/facebook/bart-large-cnn"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{}])))
        .mount(&server)
        .await;

    let results = vec![SearchResult::new("text", "https://l1.example")];
    let outcome = huggingface(&server).fetch_summary(&results).await.unwrap();
    assert_eq!(outcome, SummaryOutcome::NoAnswer);
}

#[tokio::test]
async fn test_summary_malformed_body_is_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/facebook/bart-large-cnn"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&server)
        .await;

    let results = vec![SearchResult::new("text", "https://l1.example")];
    assert!(huggingface(&server).fetch_summary(&results).await.is_err());
}
