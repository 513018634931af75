use super::*;

use wiremock::matchers::{header, headers, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client() -> PageClient {
    PageClient::new(5, "biaslens-test/0.1").unwrap()
}

#[tokio::test]
async fn fetch_html_returns_body_on_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/story"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>hello</html>"))
        .mount(&server)
        .await;

    let html = test_client()
        .fetch_html(&format!("{}/story", server.uri()))
        .await
        .unwrap();
    assert_eq!(html, "<html>hello</html>");
}

#[tokio::test]
async fn fetch_html_sends_user_agent_and_accept() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ua"))
        .and(header("user-agent", "biaslens-test/0.1"))
        // wiremock's exact-header matcher splits comma-separated values, so the
        // expected Accept value must be given in its multi-value form.
        .and(headers(
            "accept",
            vec![
                "text/html",
                "application/xhtml+xml",
                "application/xml;q=0.9",
                "*/*;q=0.8",
            ],
        ))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&server)
        .await;

    test_client()
        .fetch_html(&format!("{}/ua", server.uri()))
        .await
        .unwrap();
}

#[tokio::test]
async fn fetch_html_maps_non_success_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = test_client()
        .fetch_html(&format!("{}/gone", server.uri()))
        .await
        .unwrap_err();
    assert!(
        matches!(err, ExtractError::UnexpectedStatus { status: 404, .. }),
        "expected UnexpectedStatus(404), got: {err:?}"
    );
}

#[tokio::test]
async fn fetch_html_does_not_retry() {
    let server = MockServer::start().await;
    // expect(1) fails the test if a retry issues a second request.
    Mock::given(method("GET"))
        .and(path("/flaky"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let err = test_client()
        .fetch_html(&format!("{}/flaky", server.uri()))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ExtractError::UnexpectedStatus { status: 500, .. }
    ));
}
