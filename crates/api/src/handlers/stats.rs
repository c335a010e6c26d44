//! Handlers for derived wardrobe statistics.
//!
//! Both endpoints load the user's full ledgers once and answer from the
//! resulting [`closetlog_core::snapshot::ClosetSnapshot`], so every number
//! in one response reflects the same point in time.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use chrono::NaiveDate;
use closetlog_core::error::CoreError;
use closetlog_core::snapshot::{ClosetSnapshot, FreshnessLevel};
use closetlog_core::types::{DbId, Timestamp};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::ledger::load_closet;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Derived statistics for a single item.
#[derive(Debug, Serialize)]
pub struct ItemStats {
    pub item_id: DbId,
    pub last_worn_date: Option<NaiveDate>,
    /// Whole days since last worn; `null` means never worn.
    pub days_since_worn: Option<i64>,
    pub wear_count: usize,
    pub worn_today: bool,
    pub last_refreshed_at: Option<Timestamp>,
    pub wears_since_refresh: usize,
    pub freshness: FreshnessLevel,
}

impl ItemStats {
    fn compute(snapshot: &ClosetSnapshot, entry: closetlog_core::snapshot::ItemEntry) -> Self {
        Self {
            item_id: entry.id,
            last_worn_date: snapshot.last_worn_date(entry.id),
            days_since_worn: snapshot.days_since_worn(entry.id).as_days(),
            wear_count: snapshot.wear_count(entry.id),
            worn_today: snapshot.is_worn_today(entry.id),
            last_refreshed_at: snapshot.last_refresh(entry.id),
            wears_since_refresh: snapshot.wears_since_refresh(entry.id),
            freshness: snapshot.freshness_level(entry.id, entry.category),
        }
    }
}

/// Closet-wide statistics summary.
#[derive(Debug, Serialize)]
pub struct ClosetStats {
    pub items: Vec<ItemStats>,
    pub stale_item_count: usize,
}

/// GET /api/v1/closet/stats
///
/// Per-item derived statistics for the whole closet plus the stale count.
pub async fn closet_stats(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let loaded = load_closet(&state.pool, auth.user_id).await?;
    let snapshot = &loaded.snapshot;

    let items = snapshot
        .items()
        .iter()
        .map(|entry| ItemStats::compute(snapshot, *entry))
        .collect();

    let stats = ClosetStats {
        items,
        stale_item_count: snapshot.stale_item_count(),
    };

    Ok(Json(DataResponse { data: stats }))
}

/// GET /api/v1/closet/{id}/stats
///
/// Derived statistics for one item. 404 if the item is not owned.
pub async fn item_stats(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(item_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let loaded = load_closet(&state.pool, auth.user_id).await?;
    let snapshot = &loaded.snapshot;

    let entry = snapshot
        .items()
        .iter()
        .find(|e| e.id == item_id)
        .copied()
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ClothingItem",
            id: item_id,
        }))?;

    Ok(Json(DataResponse {
        data: ItemStats::compute(snapshot, entry),
    }))
}
