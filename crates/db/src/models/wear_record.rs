//! Wear ledger model and DTOs.

use chrono::NaiveDate;
use closetlog_core::snapshot::WearEntry;
use closetlog_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `wear_history` table: "item X was worn on date D".
///
/// Day granularity; at most one row per (item, date) is meaningful and the
/// table enforces that with a unique constraint.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WearRecord {
    pub id: DbId,
    pub user_id: DbId,
    pub clothing_id: DbId,
    pub date: NaiveDate,
    pub created_at: Timestamp,
}

impl WearRecord {
    /// The record as the statistics engine sees it.
    pub fn as_entry(&self) -> WearEntry {
        WearEntry {
            id: self.id,
            item_id: self.clothing_id,
            date: self.date,
        }
    }
}

/// Request body for recording a wear. `date` defaults to today.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecordWear {
    pub date: Option<NaiveDate>,
}
