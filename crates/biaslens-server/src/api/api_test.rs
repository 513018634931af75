use super::*;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::Request;
use serde_json::{json, Value};
use tower::ServiceExt;

use biaslens_analysis::{Oracle, OracleError};
use biaslens_extract::PageClient;

/// Oracle returning canned replies keyed on the instruction text.
struct ScriptedOracle;

#[async_trait]
impl Oracle for ScriptedOracle {
    async fn analyze(
        &self,
        _text: &str,
        instructions: &str,
        _temperature: f32,
    ) -> Result<String, OracleError> {
        if instructions.contains("return ONLY a number") {
            Ok("73.5".to_string())
        } else if instructions.contains("Rewrite") {
            Ok("A neutral rendition of the article.".to_string())
        } else {
            Ok("Biased words: [corrupt]\nNeutral alternatives: [influential]".to_string())
        }
    }
}

fn test_state() -> (AppState, Arc<HistoryStore>) {
    let page_client = PageClient::new(5, "biaslens-test/0.1").unwrap();
    let analyzer = BiasAnalyzer::new(Box::new(ScriptedOracle), page_client, 0.3);
    let history_path = std::env::temp_dir().join(format!(
        "biaslens-api-history-{}.jsonl",
        uuid::Uuid::new_v4()
    ));
    let history = Arc::new(HistoryStore::new(history_path));
    (
        AppState {
            analyzer: Arc::new(analyzer),
            history: Arc::clone(&history),
        },
        history,
    )
}

fn json_request(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_returns_ok() {
    let (state, _) = test_state();
    let response = build_app(state)
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"status": "ok"}));
}

#[tokio::test]
async fn responses_carry_a_request_id() {
    let (state, _) = test_state();
    let response = build_app(state)
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn analyze_happy_path_appends_history() {
    let (state, history) = test_state();
    let response = build_app(state)
        .oneshot(json_request(
            "/api/analyze",
            json!({"text": "The corrupt council rammed through a radical budget over objections."}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["bias_score"], json!(73.5));
    assert_eq!(body["redlined_text"]["biased_words"], json!(["corrupt"]));
    assert_eq!(body["rewritten"], json!("A neutral rendition of the article."));

    let records = history.read().await.unwrap();
    assert_eq!(records.len(), 1);
    assert!((records[0].bias_score - 73.5).abs() < f64::EPSILON);
}

#[tokio::test]
async fn analyze_without_input_is_bad_request() {
    let (state, _) = test_state();
    let response = build_app(state)
        .oneshot(json_request("/api/analyze", json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("no text or URL"));
}

#[tokio::test]
async fn analyze_with_malformed_url_is_bad_request() {
    let (state, _) = test_state();
    let response = build_app(state)
        .oneshot(json_request("/api/analyze", json!({"url": "bbc.com/news"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn source_check_rates_known_domain() {
    let (state, _) = test_state();
    let response = build_app(state)
        .oneshot(json_request(
            "/api/source-check",
            json!({"url": "https://www.bbc.com/news/uk-12345"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"source": "bbc.com", "credibility": "High"})
    );
}

#[tokio::test]
async fn source_check_without_url_is_bad_request() {
    let (state, _) = test_state();
    let response = build_app(state)
        .oneshot(json_request("/api/source-check", json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await, json!({"error": "No URL provided"}));
}

#[tokio::test]
async fn history_starts_empty() {
    let (state, _) = test_state();
    let response = build_app(state)
        .oneshot(Request::get("/api/history").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}
