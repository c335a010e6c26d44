//! Repository for the `refresh_history` ledger.

use closetlog_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::refresh_record::RefreshRecord;

/// Column list for `refresh_history` queries.
const REFRESH_COLUMNS: &str = "id, user_id, clothing_id, refreshed_at, created_at";

/// Provides owner-scoped access to the append-only refresh ledger.
pub struct RefreshRecordRepo;

impl RefreshRecordRepo {
    /// Record a refresh event. Always inserts; refreshes are never
    /// deduplicated, even within the same day.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        clothing_id: DbId,
        refreshed_at: Timestamp,
    ) -> Result<RefreshRecord, sqlx::Error> {
        let query = format!(
            "INSERT INTO refresh_history (user_id, clothing_id, refreshed_at) \
             VALUES ($1, $2, $3) \
             RETURNING {REFRESH_COLUMNS}"
        );
        sqlx::query_as::<_, RefreshRecord>(&query)
            .bind(user_id)
            .bind(clothing_id)
            .bind(refreshed_at)
            .fetch_one(pool)
            .await
    }

    /// All refresh records for a user, most recent first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<RefreshRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {REFRESH_COLUMNS} FROM refresh_history \
             WHERE user_id = $1 \
             ORDER BY refreshed_at DESC, id DESC"
        );
        sqlx::query_as::<_, RefreshRecord>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }
}
