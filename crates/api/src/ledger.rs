//! Bulk loading of a user's wardrobe into a [`ClosetSnapshot`].
//!
//! Statistics handlers load the full item list and both ledgers once per
//! request, then answer every question from the in-memory snapshot. This
//! keeps the statistics engine in `closetlog_core` free of database
//! dependencies and makes a request's numbers internally consistent even if
//! another session writes concurrently.

use chrono::Utc;
use closetlog_core::snapshot::ClosetSnapshot;
use closetlog_core::types::DbId;
use closetlog_db::models::clothing_item::ClothingItem;
use closetlog_db::repositories::{ClothingItemRepo, RefreshRecordRepo, WearRecordRepo};
use closetlog_db::DbPool;

/// A user's items alongside the snapshot built from them.
///
/// Handlers usually need both: the snapshot for statistics and the full rows
/// for response payloads.
pub struct LoadedCloset {
    pub items: Vec<ClothingItem>,
    pub snapshot: ClosetSnapshot,
}

/// Load a user's items and both ledgers and build a snapshot dated today.
pub async fn load_closet(pool: &DbPool, user_id: DbId) -> Result<LoadedCloset, sqlx::Error> {
    let items = ClothingItemRepo::list_for_user(pool, user_id).await?;
    let wear = WearRecordRepo::list_for_user(pool, user_id).await?;
    let refresh = RefreshRecordRepo::list_for_user(pool, user_id).await?;

    let snapshot = ClosetSnapshot::new(
        items.iter().map(ClothingItem::as_entry).collect(),
        wear.iter().map(|w| w.as_entry()).collect(),
        refresh.iter().map(|r| r.as_entry()).collect(),
        Utc::now().date_naive(),
    );

    Ok(LoadedCloset { items, snapshot })
}
