//! Shared helpers for HTTP-level integration tests.
//!
//! Builds the real application router (same middleware stack as production)
//! over a `#[sqlx::test]` pool and an in-memory object store, and provides
//! request helpers that attach a valid Bearer token for the test user.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use closetlog_api::auth::jwt::{generate_access_token, JwtConfig};
use closetlog_api::config::ServerConfig;
use closetlog_api::router::build_app_router;
use closetlog_api::state::AppState;
use closetlog_storage::MemoryStore;

/// The user all authenticated test requests act as.
pub const TEST_USER: i64 = 1;

/// A second user for ownership-isolation tests.
pub const OTHER_USER: i64 = 2;

/// Access code baked into the test configuration.
pub const TEST_ACCESS_CODE: &str = "murasaki";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        access_code: TEST_ACCESS_CODE.to_string(),
        jwt: JwtConfig {
            secret: "test-secret".to_string(),
            access_token_expiry_mins: 60,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool and an in-memory object store.
///
/// Uses the same [`build_app_router`] as `main.rs`, so integration tests
/// exercise the production middleware stack.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        store: Arc::new(MemoryStore::new()),
    };
    build_app_router(state, &config)
}

/// A valid Bearer token for the given user under the test JWT config.
pub fn token_for(user_id: i64) -> String {
    generate_access_token(user_id, &test_config().jwt).unwrap()
}

// ---------------------------------------------------------------------------
// Request helpers (authenticated as TEST_USER unless noted)
// ---------------------------------------------------------------------------

pub async fn get(app: Router, path: &str) -> Response {
    get_as(app, path, TEST_USER).await
}

pub async fn get_as(app: Router, path: &str, user_id: i64) -> Response {
    app.oneshot(
        Request::builder()
            .uri(path)
            .header(AUTHORIZATION, format!("Bearer {}", token_for(user_id)))
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn post_json(app: Router, path: &str, body: serde_json::Value) -> Response {
    post_json_as(app, path, body, TEST_USER).await
}

pub async fn post_json_as(
    app: Router,
    path: &str,
    body: serde_json::Value,
    user_id: i64,
) -> Response {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(path)
            .header(AUTHORIZATION, format!("Bearer {}", token_for(user_id)))
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn patch_json(app: Router, path: &str, body: serde_json::Value) -> Response {
    app.oneshot(
        Request::builder()
            .method("PATCH")
            .uri(path)
            .header(AUTHORIZATION, format!("Bearer {}", token_for(TEST_USER)))
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn delete(app: Router, path: &str) -> Response {
    delete_as(app, path, TEST_USER).await
}

pub async fn delete_as(app: Router, path: &str, user_id: i64) -> Response {
    app.oneshot(
        Request::builder()
            .method("DELETE")
            .uri(path)
            .header(AUTHORIZATION, format!("Bearer {}", token_for(user_id)))
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// POST a multipart form with the given text fields and optional image part.
pub async fn post_multipart(
    app: Router,
    path: &str,
    fields: &[(&str, &str)],
    image: Option<&[u8]>,
) -> Response {
    const BOUNDARY: &str = "----closetlog-test-boundary";

    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
        );
        body.extend_from_slice(value.as_bytes());
        body.extend_from_slice(b"\r\n");
    }
    if let Some(bytes) = image {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            b"Content-Disposition: form-data; name=\"image\"; filename=\"photo.jpg\"\r\n",
        );
        body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(path)
            .header(AUTHORIZATION, format!("Bearer {}", token_for(TEST_USER)))
            .header(
                CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body into JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
