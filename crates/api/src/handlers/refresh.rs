//! Handler for the refresh ledger.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use closetlog_core::types::DbId;
use closetlog_db::models::refresh_record::RecordRefresh;
use closetlog_db::repositories::RefreshRecordRepo;

use crate::error::AppResult;
use crate::handlers::wear::ensure_item_owned;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/closet/{id}/refresh
///
/// Record a refresh (wash) for the item. The timestamp defaults to now.
/// Unlike wears, refreshes are never deduplicated, so this always inserts.
pub async fn record_refresh(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(item_id): Path<DbId>,
    Json(input): Json<RecordRefresh>,
) -> AppResult<impl IntoResponse> {
    ensure_item_owned(&state, auth.user_id, item_id).await?;

    let refreshed_at = input.refreshed_at.unwrap_or_else(Utc::now);
    let record =
        RefreshRecordRepo::create(&state.pool, auth.user_id, item_id, refreshed_at).await?;

    tracing::info!(item_id, user_id = auth.user_id, "Refresh recorded");

    Ok((StatusCode::CREATED, Json(DataResponse { data: record })))
}
