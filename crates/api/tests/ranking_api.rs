//! HTTP-level integration tests for the `/ranking` endpoint.

mod common;

use axum::http::StatusCode;
use axum::Router;
use common::{body_json, build_test_app, get, post_json, post_multipart};
use serde_json::json;
use sqlx::PgPool;

async fn create_item(app: Router, name: &str, category: &str) -> i64 {
    let json = body_json(
        post_multipart(
            app,
            "/api/v1/closet",
            &[("name", name), ("category", category)],
            None,
        )
        .await,
    )
    .await;
    json["data"]["id"].as_i64().unwrap()
}

async fn wear_n_times(app: Router, item_id: i64, n: u64) {
    let base = chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    for i in 0..n {
        let date = base + chrono::Days::new(i);
        let response = post_json(
            app.clone(),
            &format!("/api/v1/closet/{item_id}/wear"),
            json!({ "date": date.to_string() }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_ranking_orders_by_wear_count(pool: PgPool) {
    let app = build_test_app(pool);
    let heavy = create_item(app.clone(), "Favourite Tee", "tshirt").await;
    let light = create_item(app.clone(), "Spare Tee", "tshirt").await;
    let unworn = create_item(app.clone(), "Untouched Tee", "tshirt").await;

    wear_n_times(app.clone(), heavy, 5).await;
    wear_n_times(app.clone(), light, 2).await;

    let json = body_json(get(app, "/api/v1/ranking").await).await;
    let entries = json["data"].as_array().unwrap();
    assert_eq!(entries.len(), 3);

    assert_eq!(entries[0]["item_id"], heavy);
    assert_eq!(entries[0]["rank"], 1);
    assert_eq!(entries[0]["wear_count"], 5);
    assert_eq!(entries[0]["name"], "Favourite Tee");

    assert_eq!(entries[1]["item_id"], light);
    assert_eq!(entries[2]["item_id"], unworn);
    assert_eq!(entries[2]["wear_count"], 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_equal_counts_rank_by_ascending_id(pool: PgPool) {
    let app = build_test_app(pool);
    let first = create_item(app.clone(), "Twin A", "shirt").await;
    let second = create_item(app.clone(), "Twin B", "shirt").await;

    wear_n_times(app.clone(), second, 3).await;
    wear_n_times(app.clone(), first, 3).await;

    let json = body_json(get(app, "/api/v1/ranking").await).await;
    let entries = json["data"].as_array().unwrap();
    assert_eq!(entries[0]["item_id"], first);
    assert_eq!(entries[1]["item_id"], second);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_category_filter_rebases_ranks(pool: PgPool) {
    let app = build_test_app(pool);
    let tee = create_item(app.clone(), "Filtered Tee", "tshirt").await;
    let pants = create_item(app.clone(), "Filtered Pants", "pants").await;

    wear_n_times(app.clone(), tee, 4).await;
    wear_n_times(app.clone(), pants, 1).await;

    let json = body_json(get(app, "/api/v1/ranking?category=pants").await).await;
    let entries = json["data"].as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["item_id"], pants);
    assert_eq!(entries[0]["rank"], 1);
    assert_eq!(entries[0]["tier"], 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_category_all_is_no_filter(pool: PgPool) {
    let app = build_test_app(pool);
    create_item(app.clone(), "All Tee", "tshirt").await;
    create_item(app.clone(), "All Pants", "pants").await;

    let json = body_json(get(app, "/api/v1/ranking?category=all").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_week_period_excludes_old_wears(pool: PgPool) {
    let app = build_test_app(pool);
    let id = create_item(app.clone(), "Seasonal Tee", "tshirt").await;

    // Wears from January 2024 are far outside any recent week window.
    wear_n_times(app.clone(), id, 3).await;

    let json = body_json(get(app, "/api/v1/ranking?period=week").await).await;
    let entries = json["data"].as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["wear_count"], 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_invalid_period_is_rejected(pool: PgPool) {
    let app = build_test_app(pool);
    let response = get(app, "/api/v1/ranking?period=fortnight").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_empty_closet_ranking_is_empty(pool: PgPool) {
    let app = build_test_app(pool);
    let json = body_json(get(app, "/api/v1/ranking").await).await;
    assert!(json["data"].as_array().unwrap().is_empty());
}
