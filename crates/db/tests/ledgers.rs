//! Repository-level tests for the wear and refresh ledgers.

use chrono::NaiveDate;
use closetlog_core::category::CategoryId;
use closetlog_db::models::clothing_item::CreateClothingItem;
use closetlog_db::repositories::{ClothingItemRepo, RefreshRecordRepo, WearRecordRepo};
use sqlx::PgPool;

const USER: i64 = 1;
const OTHER_USER: i64 = 2;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

async fn seed_item(pool: &PgPool, name: &str) -> i64 {
    let input = CreateClothingItem {
        name: name.to_string(),
        category: CategoryId::Tshirt,
        color: None,
        notes: None,
        acquired_date: None,
        price: None,
    };
    ClothingItemRepo::create(pool, USER, &input, None)
        .await
        .unwrap()
        .id
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn record_wear_is_idempotent_per_day(pool: PgPool) {
    let item = seed_item(&pool, "Tee").await;
    let day = date(2024, 5, 1);

    let (first, created_first) = WearRecordRepo::record(&pool, USER, item, day).await.unwrap();
    let (second, created_second) = WearRecordRepo::record(&pool, USER, item, day).await.unwrap();

    assert!(created_first);
    assert!(!created_second, "second record on the same day must not insert");
    assert_eq!(first.id, second.id);

    let records = WearRecordRepo::list_for_item(&pool, USER, item).await.unwrap();
    assert_eq!(records.len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn record_wear_different_days_insert_separately(pool: PgPool) {
    let item = seed_item(&pool, "Tee").await;

    WearRecordRepo::record(&pool, USER, item, date(2024, 5, 1)).await.unwrap();
    WearRecordRepo::record(&pool, USER, item, date(2024, 5, 2)).await.unwrap();

    let records = WearRecordRepo::list_for_item(&pool, USER, item).await.unwrap();
    assert_eq!(records.len(), 2);
    // Most recent date first.
    assert_eq!(records[0].date, date(2024, 5, 2));
    assert_eq!(records[1].date, date(2024, 5, 1));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_wear_record_is_owner_scoped(pool: PgPool) {
    let item = seed_item(&pool, "Tee").await;
    let (record, _) = WearRecordRepo::record(&pool, USER, item, date(2024, 5, 1))
        .await
        .unwrap();

    assert!(!WearRecordRepo::delete(&pool, OTHER_USER, record.id).await.unwrap());
    assert!(WearRecordRepo::delete(&pool, USER, record.id).await.unwrap());

    let records = WearRecordRepo::list_for_item(&pool, USER, item).await.unwrap();
    assert!(records.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn refresh_records_are_never_deduplicated(pool: PgPool) {
    let item = seed_item(&pool, "Tee").await;
    let at = chrono::Utc::now();

    let first = RefreshRecordRepo::create(&pool, USER, item, at).await.unwrap();
    let second = RefreshRecordRepo::create(&pool, USER, item, at).await.unwrap();

    assert_ne!(first.id, second.id, "each refresh is a distinct event");

    let records = RefreshRecordRepo::list_for_user(&pool, USER).await.unwrap();
    assert_eq!(records.len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn ledgers_are_user_scoped(pool: PgPool) {
    let item = seed_item(&pool, "Tee").await;
    WearRecordRepo::record(&pool, USER, item, date(2024, 5, 1)).await.unwrap();
    RefreshRecordRepo::create(&pool, USER, item, chrono::Utc::now())
        .await
        .unwrap();

    assert!(WearRecordRepo::list_for_user(&pool, OTHER_USER)
        .await
        .unwrap()
        .is_empty());
    assert!(RefreshRecordRepo::list_for_user(&pool, OTHER_USER)
        .await
        .unwrap()
        .is_empty());
}
