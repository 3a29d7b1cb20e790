//! Wire-level tests for the HTTP backend against a mock server.

use parlor_client::HttpAssistantBackend;
use parlor_core::backend::{AssistantBackend, BackendError};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn health_check_accepts_any_2xx() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": "ok"})))
        .mount(&server)
        .await;

    let backend = HttpAssistantBackend::new(server.uri());
    assert!(backend.health_check().await.is_ok());
}

#[tokio::test]
async fn health_check_maps_non_2xx_to_service_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let backend = HttpAssistantBackend::new(server.uri());
    let err = backend.health_check().await.unwrap_err();
    assert!(matches!(err, BackendError::Service { status: 503, .. }));
}

#[tokio::test]
async fn send_message_posts_json_and_returns_reply_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .and(body_json(serde_json::json!({
            "message": "Hello",
            "user_id": "session-1",
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"message": "Hi there!"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let backend = HttpAssistantBackend::new(server.uri());
    let reply = backend.send_message("Hello", "session-1").await.unwrap();
    assert_eq!(reply, "Hi there!");
}

#[tokio::test]
async fn send_message_surfaces_error_body_on_non_2xx() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(500).set_body_string("model quota exceeded"))
        .mount(&server)
        .await;

    let backend = HttpAssistantBackend::new(server.uri());
    let err = backend.send_message("Hello", "session-1").await.unwrap_err();
    match err {
        BackendError::Service { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "model quota exceeded");
        }
        other => panic!("expected Service error, got {:?}", other),
    }
}

#[tokio::test]
async fn send_message_with_malformed_body_is_unexpected_not_service() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let backend = HttpAssistantBackend::new(server.uri());
    let err = backend.send_message("Hello", "session-1").await.unwrap_err();
    assert!(matches!(err, BackendError::Unexpected { .. }));
}

#[tokio::test]
async fn unreachable_server_is_a_connectivity_failure() {
    // Nothing listens on this port; the connection is refused.
    let backend = HttpAssistantBackend::new("http://127.0.0.1:9");
    let err = backend.send_message("Hello", "session-1").await.unwrap_err();
    assert!(err.is_connectivity(), "got {:?}", err);

    let err = backend.health_check().await.unwrap_err();
    assert!(err.is_connectivity(), "got {:?}", err);
}

#[tokio::test]
async fn clear_session_hits_the_scoped_path_and_ignores_the_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/clear/session-1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let backend = HttpAssistantBackend::new(server.uri());
    assert!(backend.clear_session("session-1").await.is_ok());
}

#[tokio::test]
async fn clear_session_maps_non_2xx_to_service_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/clear/session-1"))
        .respond_with(ResponseTemplate::new(404).set_body_string("unknown session"))
        .mount(&server)
        .await;

    let backend = HttpAssistantBackend::new(server.uri());
    let err = backend.clear_session("session-1").await.unwrap_err();
    assert!(matches!(err, BackendError::Service { status: 404, .. }));
}
