//! HTTP request handlers

use super::state::AppState;
use crate::orchestrator::{QueryError, UiState};
use crate::providers::ProviderAbout;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tera::Context;

/// Query parameters for search
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Search query; a missing parameter counts as empty
    pub q: Option<String>,
    /// Output format (`html` or `json`)
    pub format: Option<String>,
}

/// Search outcome for JSON format
#[derive(Debug, Serialize, Deserialize)]
pub struct AnswerResponse {
    pub query: String,
    pub answer: String,
    pub sources: Vec<String>,
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
struct ProviderView<'a> {
    role: &'static str,
    name: &'a str,
    about: ProviderAbout,
    avg_response_ms: Option<u64>,
}

/// Home page handler.
///
/// There is one display state per server, so every client sees the most
/// recent query and its outcome, whoever asked it.
pub async fn index(State(state): State<AppState>) -> Response {
    render_page(&state, &state.orchestrator.state())
}

/// Search handler
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Response {
    let query = params.q.unwrap_or_default();
    let outcome = state.orchestrator.search(&query).await;

    let view = match &outcome {
        Ok(result) => UiState::resolved(&query, result),
        Err(error) => UiState::failed(&query, error),
    };

    match params.format.as_deref() {
        Some("json") => {
            let status = match &outcome {
                Ok(_) => StatusCode::OK,
                Err(error) => status_for(error),
            };
            let response = AnswerResponse {
                query: view.query,
                answer: view.answer,
                sources: view.sources,
                error: outcome.err().map(|e| e.to_string()),
            };
            (status, Json(response)).into_response()
        }
        _ => render_page(&state, &view),
    }
}

/// Current display state as JSON
pub async fn current_state(State(state): State<AppState>) -> Json<UiState> {
    Json(state.orchestrator.state())
}

/// Stats page handler
pub async fn stats(State(state): State<AppState>) -> Response {
    let orchestrator = &state.orchestrator;
    let metrics = orchestrator.metrics();
    let search = orchestrator.search_provider();
    let summarizer = orchestrator.summary_provider();
    let providers = vec![
        ProviderView {
            role: "search",
            name: search.name(),
            about: search.about(),
            avg_response_ms: metrics.get_avg_response_time(search.name()),
        },
        ProviderView {
            role: "summarizer",
            name: summarizer.name(),
            about: summarizer.about(),
            avg_response_ms: metrics.get_avg_response_time(summarizer.name()),
        },
    ];

    let mut ctx = Context::new();
    ctx.insert("instance_name", state.instance_name());
    ctx.insert("version", crate::VERSION);
    let snapshot = metrics.snapshot();
    ctx.insert("total_failures", &snapshot.total_failures());
    ctx.insert("metrics", &snapshot);
    ctx.insert("cached_queries", &orchestrator.cache().len().await);
    ctx.insert("providers", &providers);
    ctx.insert("model", &state.settings.summarizer.model);

    match state.templates.render_with_context("stats.html", &ctx) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("Template error: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Template error").into_response()
        }
    }
}

/// Health check handler
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": crate::VERSION
    }))
}

fn render_page(state: &AppState, view: &UiState) -> Response {
    let mut ctx = Context::new();
    ctx.insert("instance_name", state.instance_name());
    ctx.insert("state", view);

    match state.templates.render_with_context("index.html", &ctx) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("Template error: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Template error").into_response()
        }
    }
}

fn status_for(error: &QueryError) -> StatusCode {
    match error {
        QueryError::EmptyQuery => StatusCode::BAD_REQUEST,
        QueryError::NoResults => StatusCode::NOT_FOUND,
        e if e.is_provider_failure() => StatusCode::BAD_GATEWAY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
