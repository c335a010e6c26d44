//! Repository for the `wear_history` ledger.

use chrono::NaiveDate;
use closetlog_core::types::DbId;
use sqlx::PgPool;

use crate::models::wear_record::WearRecord;

/// Column list for `wear_history` queries.
const WEAR_COLUMNS: &str = "id, user_id, clothing_id, date, created_at";

/// Provides owner-scoped access to the append-only wear ledger.
pub struct WearRecordRepo;

impl WearRecordRepo {
    /// Record a wear for an item on a date, idempotently.
    ///
    /// The `uq_wear_history_clothing_date` constraint guarantees one row per
    /// (item, date) even under concurrent sessions; `ON CONFLICT DO NOTHING`
    /// plus a re-select makes the duplicate path indistinguishable from the
    /// insert path apart from the `created` flag.
    pub async fn record(
        pool: &PgPool,
        user_id: DbId,
        clothing_id: DbId,
        date: NaiveDate,
    ) -> Result<(WearRecord, bool), sqlx::Error> {
        let query = format!(
            "INSERT INTO wear_history (user_id, clothing_id, date) \
             VALUES ($1, $2, $3) \
             ON CONFLICT (clothing_id, date) DO NOTHING \
             RETURNING {WEAR_COLUMNS}"
        );
        let inserted = sqlx::query_as::<_, WearRecord>(&query)
            .bind(user_id)
            .bind(clothing_id)
            .bind(date)
            .fetch_optional(pool)
            .await?;

        match inserted {
            Some(record) => Ok((record, true)),
            None => {
                tracing::debug!(clothing_id, %date, "Wear already recorded for date");
                let query = format!(
                    "SELECT {WEAR_COLUMNS} FROM wear_history \
                     WHERE clothing_id = $1 AND date = $2 AND user_id = $3"
                );
                let existing = sqlx::query_as::<_, WearRecord>(&query)
                    .bind(clothing_id)
                    .bind(date)
                    .bind(user_id)
                    .fetch_one(pool)
                    .await?;
                Ok((existing, false))
            }
        }
    }

    /// All wear records for a user, most recent date first.
    ///
    /// This is the session bulk load the statistics engine works from.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<WearRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {WEAR_COLUMNS} FROM wear_history \
             WHERE user_id = $1 \
             ORDER BY date DESC, id DESC"
        );
        sqlx::query_as::<_, WearRecord>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// One item's wear records, most recent date first.
    pub async fn list_for_item(
        pool: &PgPool,
        user_id: DbId,
        clothing_id: DbId,
    ) -> Result<Vec<WearRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {WEAR_COLUMNS} FROM wear_history \
             WHERE user_id = $1 AND clothing_id = $2 \
             ORDER BY date DESC, id DESC"
        );
        sqlx::query_as::<_, WearRecord>(&query)
            .bind(user_id)
            .bind(clothing_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a single wear record by id, scoped to its owner.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, user_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM wear_history WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
