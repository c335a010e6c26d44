//! Handlers for the wear ledger.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use closetlog_core::error::CoreError;
use closetlog_core::types::DbId;
use closetlog_db::models::wear_record::RecordWear;
use closetlog_db::repositories::{ClothingItemRepo, WearRecordRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/closet/{id}/wear
///
/// Record a wear for the item. The date defaults to today. Idempotent per
/// (item, date): an existing record comes back with 200, a new one with 201.
pub async fn record_wear(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(item_id): Path<DbId>,
    Json(input): Json<RecordWear>,
) -> AppResult<impl IntoResponse> {
    ensure_item_owned(&state, auth.user_id, item_id).await?;

    let date = input.date.unwrap_or_else(|| Utc::now().date_naive());
    let (record, created) = WearRecordRepo::record(&state.pool, auth.user_id, item_id, date).await?;

    let status = if created {
        tracing::info!(item_id, user_id = auth.user_id, %date, "Wear recorded");
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((status, Json(DataResponse { data: record })))
}

/// GET /api/v1/closet/{id}/history
///
/// The item's wear records, most recent date first.
pub async fn item_history(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(item_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_item_owned(&state, auth.user_id, item_id).await?;

    let records = WearRecordRepo::list_for_item(&state.pool, auth.user_id, item_id).await?;

    Ok(Json(DataResponse { data: records }))
}

/// DELETE /api/v1/wear-records/{id}
///
/// Delete one wear record. 404 if the id does not exist or belongs to
/// another user.
pub async fn delete_wear_record(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(record_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = WearRecordRepo::delete(&state.pool, auth.user_id, record_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "WearRecord",
            id: record_id,
        }));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// 404 unless the item exists and belongs to the user.
pub(crate) async fn ensure_item_owned(
    state: &AppState,
    user_id: DbId,
    item_id: DbId,
) -> Result<(), AppError> {
    ClothingItemRepo::find_by_id(&state.pool, user_id, item_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ClothingItem",
            id: item_id,
        }))?;
    Ok(())
}
