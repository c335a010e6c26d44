//! Integration tests for the access gate and JWT authentication.

mod common;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Request, StatusCode};
use common::{body_json, build_test_app};
use sqlx::PgPool;
use tower::ServiceExt;

/// POST /auth/verify-code without an auth header (the gate is public).
async fn verify(app: axum::Router, body: &str) -> axum::response::Response {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri("/api/v1/auth/verify-code")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

// ---------------------------------------------------------------------------
// Gate
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_correct_code_succeeds(pool: PgPool) {
    let response = verify(build_test_app(pool), r#"{"code": "murasaki"}"#).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["success"], true);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_code_comparison_is_case_insensitive(pool: PgPool) {
    let response = verify(build_test_app(pool), r#"{"code": "MuRaSaKi"}"#).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["success"], true);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_wrong_code_is_unauthorized(pool: PgPool) {
    let response = verify(build_test_app(pool), r#"{"code": "wrong"}"#).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["success"], false);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_whitespace_is_not_trimmed(pool: PgPool) {
    let response = verify(build_test_app(pool), r#"{"code": " murasaki"}"#).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_malformed_body_is_bad_request(pool: PgPool) {
    let response = verify(build_test_app(pool), "{not json").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// JWT guard on owner-scoped routes
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_token_is_unauthorized(pool: PgPool) {
    let app = build_test_app(pool);
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/closet")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_garbage_token_is_unauthorized(pool: PgPool) {
    let app = build_test_app(pool);
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/closet")
                .header("authorization", "Bearer not.a.token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_non_bearer_scheme_is_unauthorized(pool: PgPool) {
    let app = build_test_app(pool);
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/closet")
                .header("authorization", "Basic dXNlcjpwYXNz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
