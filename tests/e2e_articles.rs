// tests/e2e_articles.rs
use axum::http::{Method, StatusCode};
use serde_json::json;
use tower::util::ServiceExt as _;

mod support;

/// 記事作成で 201 と ID・作成日時が返ることを確認する
#[tokio::test]
async fn e2e_create_article_returns_201_with_id_and_timestamp() {
    let (app, store) = support::make_test_router();

    let req = support::json_request(
        Method::POST,
        "/api/v1/articles",
        json!({ "title": "Hello", "content": "World" }),
    );
    let resp = app.oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = support::read_json(resp).await;
    assert!(body["id"].as_str().is_some_and(|id| id.len() == 36));
    assert_eq!(body["created_at"], "2024-01-01T00:00:00Z");
    assert_eq!(store.len().unwrap(), 1);
}

/// 作成 → 編集 → 取得の一連の流れを確認する
#[tokio::test]
async fn e2e_create_edit_get_roundtrip() {
    let (app, _store) = support::make_test_router();

    let create = support::json_request(
        Method::POST,
        "/api/v1/articles",
        json!({ "title": "Hello", "content": "World" }),
    );
    let created = support::read_json(app.clone().oneshot(create).await.unwrap()).await;
    let id = created["id"].as_str().unwrap().to_string();

    let edit = support::json_request(
        Method::PUT,
        &format!("/api/v1/articles/{id}"),
        json!({ "title": "Hi", "content": "World" }),
    );
    let resp = app.clone().oneshot(edit).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let get = support::empty_request(Method::GET, &format!("/api/v1/articles/{id}"));
    let resp = app.oneshot(get).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let article = support::read_json(resp).await;
    assert_eq!(article["id"], id.as_str());
    assert_eq!(article["title"], "Hi");
    assert_eq!(article["content"], "World");
    assert_eq!(article["created_at"], "2024-01-01T00:00:00Z");
    assert_eq!(article["updated_at"], "2024-01-01T00:00:01Z");
}

#[tokio::test]
async fn e2e_request_id_is_echoed() {
    let (app, _store) = support::make_test_router();

    let mut req = support::empty_request(Method::GET, "/health");
    req.headers_mut()
        .insert("x-request-id", "abc-123".parse().unwrap());
    let resp = app.oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get("x-request-id").and_then(|v| v.to_str().ok()),
        Some("abc-123")
    );
}

#[tokio::test]
async fn e2e_health_returns_ok() {
    let (app, _store) = support::make_test_router();

    let resp = app
        .oneshot(support::empty_request(Method::GET, "/health"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(support::read_json(resp).await["status"], "ok");

    let direct = blog_engine::presentation::http::routes::health().await;
    assert_eq!(direct.0.status, "ok");
}

#[tokio::test]
async fn e2e_openapi_document_is_served() {
    let (app, _store) = support::make_test_router();

    let resp = app
        .oneshot(support::empty_request(Method::GET, "/openapi.json"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let doc = support::read_json(resp).await;
    assert!(doc["paths"]["/api/v1/articles/{id}"].is_object());
}
