// tests/support/helpers.rs
use super::mocks;
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode};
use blog_engine::application::services::ApplicationServices;
use blog_engine::domain::article::{ArticleFinder, ArticleSaver};
use blog_engine::infrastructure::repositories::InMemoryArticleStore;
use blog_engine::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::sync::Arc;

/// Router backed by a fresh in-memory store and a stepping clock. The store is
/// returned so tests can inspect it directly.
pub fn make_test_router() -> (axum::Router, Arc<InMemoryArticleStore>) {
    let store = Arc::new(InMemoryArticleStore::new());
    let finder: Arc<dyn ArticleFinder> = Arc::clone(&store) as Arc<dyn ArticleFinder>;
    let saver: Arc<dyn ArticleSaver> = Arc::clone(&store) as Arc<dyn ArticleSaver>;
    let services = ApplicationServices::new(finder, saver, Arc::new(mocks::SteppingClock::new()))
        .expect("build services");

    let state = HttpState {
        services: Arc::new(services),
    };
    (build_router(state), store)
}

pub fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn read_json(resp: axum::response::Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("expected valid json body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {}", ct);
    let json = read_json(resp).await;
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {}", err_field);
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
