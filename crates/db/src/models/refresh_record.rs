//! Refresh (laundering) ledger model and DTOs.

use closetlog_core::snapshot::RefreshEntry;
use closetlog_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `refresh_history` table: "item X was laundered at T".
///
/// Unlike wears, refreshes are discrete timestamped events and are never
/// deduplicated; several refreshes on the same day are all kept.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RefreshRecord {
    pub id: DbId,
    pub user_id: DbId,
    pub clothing_id: DbId,
    pub refreshed_at: Timestamp,
    pub created_at: Timestamp,
}

impl RefreshRecord {
    /// The record as the statistics engine sees it.
    pub fn as_entry(&self) -> RefreshEntry {
        RefreshEntry {
            id: self.id,
            item_id: self.clothing_id,
            refreshed_at: self.refreshed_at,
        }
    }
}

/// Request body for recording a refresh. `refreshed_at` defaults to now.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecordRefresh {
    pub refreshed_at: Option<Timestamp>,
}
