mod analyze;
mod history;
mod source;

use axum::{
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use biaslens_analysis::error::PASTE_TEXT_SUGGESTION;
use biaslens_analysis::{AnalysisError, BiasAnalyzer};

use crate::history::HistoryStore;
use crate::middleware::request_id;

#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<BiasAnalyzer>,
    pub history: Arc<HistoryStore>,
}

/// Wire shape for every failed request: `{error, details?, suggestion?}`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    #[serde(skip)]
    status: StatusCode,
}

impl ErrorResponse {
    fn bad_request(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
            suggestion: None,
            status: StatusCode::BAD_REQUEST,
        }
    }

    fn internal() -> Self {
        Self {
            error: "Internal Server Error".to_string(),
            details: None,
            suggestion: None,
            status: StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> axum::response::Response {
        (self.status, Json(self)).into_response()
    }
}

/// Maps pipeline failures to wire errors. Validation, extraction and
/// score-parse failures are user-correctable 400s; anything else is a
/// generic 500 with no internal detail leaked.
pub(super) fn map_analysis_error(error: &AnalysisError) -> ErrorResponse {
    match error {
        AnalysisError::Validation(msg) => ErrorResponse::bad_request(msg.clone()),
        AnalysisError::Extraction { reason } => ErrorResponse {
            error: "Could not extract article content from the URL.".to_string(),
            details: Some(reason.clone()),
            suggestion: Some(PASTE_TEXT_SUGGESTION.to_string()),
            status: StatusCode::BAD_REQUEST,
        },
        AnalysisError::ScoreUnparseable => {
            ErrorResponse::bad_request("Bias score could not be determined.")
        }
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static("x-request-id"),
        ])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/analyze", post(analyze::analyze))
        .route("/api/source-check", post(source::source_check))
        .route("/api/history", get(history::list_history))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

#[derive(Debug, Serialize)]
struct HealthData {
    status: &'static str,
}

async fn health() -> impl IntoResponse {
    Json(HealthData { status: "ok" })
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
