//! Integration tests for the proxy-facing insight client against a stubbed
//! proxy service.

use noteleaf_core::Error;
use noteleaf_insight::{InsightClient, InsightClientConfig};
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> InsightClient {
    InsightClient::new(InsightClientConfig {
        base_url: server.uri(),
        timeout_seconds: 5,
    })
    .expect("Failed to create client")
}

#[tokio::test]
async fn posts_content_and_parses_insight() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ai-note"))
        .and(body_json(serde_json::json!({ "content": "hello" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "summary": "s",
            "tags": ["a", "b"],
            "mood": "happy"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let insight = client
        .request_insight("hello", &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(insight.summary, "s");
    assert_eq!(insight.tags, vec!["a", "b"]);
    assert_eq!(insight.mood, "happy");
}

#[tokio::test]
async fn proxy_failure_maps_to_ai_request_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ai-note"))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
            "error": "AI request failed"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .request_insight("hello", &CancellationToken::new())
        .await
        .unwrap_err();

    match err {
        Error::AiRequest(msg) => assert!(msg.contains("500")),
        other => panic!("Expected AiRequest error, got: {other:?}"),
    }
}

#[tokio::test]
async fn unparseable_proxy_body_maps_to_ai_request_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ai-note"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .request_insight("hello", &CancellationToken::new())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::AiRequest(_)));
}

#[tokio::test]
async fn pre_cancelled_token_short_circuits() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let cancel = CancellationToken::new();
    cancel.cancel();

    let err = client
        .request_insight("hello", &cancel)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Cancelled));
}
