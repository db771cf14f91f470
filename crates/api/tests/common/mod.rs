//! Shared harness for HTTP-level integration tests.
//!
//! Builds the real application router (same middleware stack as
//! production) on top of a per-test database and temporary upload/pages
//! directories, and provides request helpers driven through
//! `tower::ServiceExt` without a TCP listener.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;

use flipbook_api::config::ServerConfig;
use flipbook_api::router::build_app_router;
use flipbook_api::state::AppState;

/// A test application: router plus the state and scratch directories
/// backing it. The `TempDir` guard keeps the upload/pages directories
/// alive for the duration of the test.
pub struct TestApp {
    pub state: AppState,
    router: Router,
    _scratch: tempfile::TempDir,
}

/// Build a test `ServerConfig` rooted in a scratch directory.
pub fn test_config(root: &std::path::Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite://:memory:".to_string(),
        upload_dir: root.join("uploads"),
        pages_dir: root.join("pages"),
        max_upload_mb: 10,
        request_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, using
/// the given database pool. Mirrors the router construction in `main.rs`.
pub fn build_test_app(pool: SqlitePool) -> TestApp {
    let scratch = tempfile::tempdir().expect("failed to create scratch dir");
    let config = test_config(scratch.path());

    std::fs::create_dir_all(&config.upload_dir).unwrap();
    std::fs::create_dir_all(&config.pages_dir).unwrap();

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };

    let router = build_app_router(state.clone(), &config);

    TestApp {
        state,
        router,
        _scratch: scratch,
    }
}

impl TestApp {
    /// A fresh clone of the router for a single `oneshot` call.
    pub fn router(&self) -> Router {
        self.router.clone()
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: &TestApp, uri: &str) -> Response<Body> {
    app.router()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

pub async fn post_json(app: &TestApp, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.router()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

pub async fn delete(app: &TestApp, uri: &str) -> Response<Body> {
    app.router()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

/// POST a single-file multipart upload to `/upload`.
///
/// `filename` of `None` sends a plain (non-file) form field, matching a
/// form submitted with no file chosen.
pub async fn post_upload(app: &TestApp, filename: Option<&str>, data: &[u8]) -> Response<Body> {
    const BOUNDARY: &str = "flipbook-test-boundary";

    let disposition = match filename {
        Some(name) => format!("form-data; name=\"pdf\"; filename=\"{name}\""),
        None => "form-data; name=\"pdf\"".to_string(),
    };

    let mut body = Vec::new();
    body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(format!("Content-Disposition: {disposition}\r\n").as_bytes());
    body.extend_from_slice(b"Content-Type: application/pdf\r\n\r\n");
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    app.router()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/upload")
                .header(
                    header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={BOUNDARY}"),
                )
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap()
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect a response body as a UTF-8 string.
pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Assert a JSON error body with the expected status.
pub async fn assert_error(response: Response<Body>, status: StatusCode) -> serde_json::Value {
    assert_eq!(response.status(), status);
    let json = body_json(response).await;
    assert!(json["error"].is_string(), "expected error body: {json}");
    json
}

/// Seed a book row directly, bypassing the upload pipeline.
pub async fn seed_book(pool: &SqlitePool, title: &str) -> flipbook_db::models::book::Book {
    let id = uuid::Uuid::new_v4().to_string();
    flipbook_db::repositories::BookRepo::create(
        pool,
        &flipbook_db::models::book::CreateBook {
            id: id.clone(),
            title: title.to_string(),
            stored_filename: format!("{id}_{title}"),
        },
    )
    .await
    .unwrap()
}
