use super::*;

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn oracle_for(server: &MockServer) -> OpenAiOracle {
    OpenAiOracle::new("sk-test", "gpt-4-turbo").with_base_url(&server.uri())
}

fn chat_body(content: &str) -> serde_json::Value {
    json!({"choices": [{"message": {"role": "assistant", "content": content}}]})
}

#[tokio::test]
async fn analyze_returns_trimmed_first_choice() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .and(body_partial_json(json!({
            "model": "gpt-4-turbo",
            "temperature": 0.3,
            "messages": [
                {"role": "system", "content": "score this"},
                {"role": "user", "content": "some article"}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_body("  42.0  \n")))
        .expect(1)
        .mount(&server)
        .await;

    let reply = oracle_for(&server)
        .analyze("some article", "score this", 0.3)
        .await
        .unwrap();
    assert_eq!(reply, "42.0");
}

#[tokio::test]
async fn rate_limit_maps_to_typed_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let err = oracle_for(&server).analyze("t", "i", 0.3).await.unwrap_err();
    assert!(matches!(err, OracleError::RateLimited), "got: {err:?}");
    assert_eq!(
        err.sentinel(),
        "Error: Analysis service rate limit exceeded. Try again later."
    );
}

#[tokio::test]
async fn server_error_maps_to_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = oracle_for(&server).analyze("t", "i", 0.3).await.unwrap_err();
    assert!(
        matches!(err, OracleError::Api { status: 500, ref body } if body == "boom"),
        "got: {err:?}"
    );
}

#[tokio::test]
async fn empty_choices_maps_to_empty_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
        .mount(&server)
        .await;

    let err = oracle_for(&server).analyze("t", "i", 0.3).await.unwrap_err();
    assert!(matches!(err, OracleError::EmptyResponse), "got: {err:?}");
}

#[tokio::test]
async fn blank_content_maps_to_empty_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_body("   ")))
        .mount(&server)
        .await;

    let err = oracle_for(&server).analyze("t", "i", 0.3).await.unwrap_err();
    assert!(matches!(err, OracleError::EmptyResponse), "got: {err:?}");
}

#[tokio::test]
async fn malformed_body_maps_to_empty_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = oracle_for(&server).analyze("t", "i", 0.3).await.unwrap_err();
    assert!(matches!(err, OracleError::EmptyResponse), "got: {err:?}");
}
