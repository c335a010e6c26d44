//! Handlers for clothing item CRUD.
//!
//! Item creation is multipart so the photo travels with the metadata. The
//! image is compressed and uploaded before the row is inserted; an upload
//! failure aborts the whole add, so no item ever references an object that
//! was never stored.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::NaiveDate;
use closetlog_core::category::CategoryId;
use closetlog_core::error::CoreError;
use closetlog_core::types::DbId;
use closetlog_db::models::clothing_item::{CreateClothingItem, UpdateClothingItem};
use closetlog_db::repositories::ClothingItemRepo;
use closetlog_storage::{compress::compress_image, object_key};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// CRUD
// ---------------------------------------------------------------------------

/// GET /api/v1/closet
///
/// List the caller's items, newest first.
pub async fn list_items(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let items = ClothingItemRepo::list_for_user(&state.pool, auth.user_id).await?;

    Ok(Json(DataResponse { data: items }))
}

/// GET /api/v1/closet/{id}
///
/// Fetch one item. 404 if the id does not exist or belongs to another user.
pub async fn get_item(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(item_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let item = ClothingItemRepo::find_by_id(&state.pool, auth.user_id, item_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ClothingItem",
            id: item_id,
        }))?;

    Ok(Json(DataResponse { data: item }))
}

/// POST /api/v1/closet
///
/// Multipart create. Text fields: `name` (required), `category`, `color`,
/// `notes`, `acquired_date`, `price`; optional `image` file part.
///
/// The image (if any) is compressed and uploaded first. Upload failure
/// aborts the add before any row is inserted.
pub async fn create_item(
    auth: AuthUser,
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let form = ItemForm::from_multipart(multipart).await?;
    let input = form.to_create()?;
    input.validate()?;

    let image_url = match form_image(&form) {
        Some(bytes) => {
            let compressed = compress_image(bytes)?;
            let key = object_key(auth.user_id);
            let url = state
                .store
                .upload(&key, compressed.bytes, compressed.content_type)
                .await?;
            Some(url)
        }
        None => None,
    };

    let item =
        ClothingItemRepo::create(&state.pool, auth.user_id, &input, image_url.as_deref()).await?;

    tracing::info!(item_id = item.id, user_id = auth.user_id, "Clothing item created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: item })))
}

/// PATCH /api/v1/closet/{id}
///
/// Partial update. Absent fields are unchanged.
pub async fn update_item(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(item_id): Path<DbId>,
    Json(patch): Json<UpdateClothingItem>,
) -> AppResult<impl IntoResponse> {
    if let Some(name) = &patch.name {
        if name.is_empty() {
            return Err(AppError::Core(CoreError::Validation(
                "name must not be empty".into(),
            )));
        }
    }

    let item = ClothingItemRepo::update(&state.pool, auth.user_id, item_id, &patch)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ClothingItem",
            id: item_id,
        }))?;

    Ok(Json(DataResponse { data: item }))
}

/// DELETE /api/v1/closet/{id}
///
/// Delete an item. Ledger rows cascade via foreign keys; the stored photo is
/// removed best-effort afterwards and a failure there is only logged.
pub async fn delete_item(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(item_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let item = ClothingItemRepo::find_by_id(&state.pool, auth.user_id, item_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ClothingItem",
            id: item_id,
        }))?;

    ClothingItemRepo::delete(&state.pool, auth.user_id, item_id).await?;

    if let Some(image_url) = &item.image_url {
        if let Err(err) = state.store.delete(image_url).await {
            tracing::warn!(item_id, error = %err, "Failed to delete item image");
        }
    }

    tracing::info!(item_id, user_id = auth.user_id, "Clothing item deleted");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Multipart form parsing
// ---------------------------------------------------------------------------

/// Raw multipart fields of the item create form.
#[derive(Debug, Default)]
struct ItemForm {
    name: Option<String>,
    category: Option<String>,
    color: Option<String>,
    notes: Option<String>,
    acquired_date: Option<String>,
    price: Option<String>,
    image: Option<Vec<u8>>,
}

impl ItemForm {
    async fn from_multipart(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = Self::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::BadRequest(format!("Invalid multipart body: {e}")))?
        {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                "image" => {
                    let bytes = field
                        .bytes()
                        .await
                        .map_err(|e| AppError::BadRequest(format!("Invalid image part: {e}")))?;
                    form.image = Some(bytes.to_vec());
                }
                other => {
                    let text = field.text().await.map_err(|e| {
                        AppError::BadRequest(format!("Invalid field '{other}': {e}"))
                    })?;
                    match other {
                        "name" => form.name = Some(text),
                        "category" => form.category = Some(text),
                        "color" => form.color = Some(text),
                        "notes" => form.notes = Some(text),
                        "acquired_date" => form.acquired_date = Some(text),
                        "price" => form.price = Some(text),
                        // Unknown fields are ignored.
                        _ => {}
                    }
                }
            }
        }

        Ok(form)
    }

    /// Convert the raw text fields into a typed create DTO.
    fn to_create(&self) -> Result<CreateClothingItem, AppError> {
        let name = self
            .name
            .clone()
            .ok_or_else(|| AppError::BadRequest("Missing field 'name'".into()))?;

        // Unknown category strings fall back to `other`.
        let category = self
            .category
            .as_deref()
            .map(CategoryId::parse)
            .unwrap_or(CategoryId::Other);

        let acquired_date = self
            .acquired_date
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(|s| {
                s.parse::<NaiveDate>().map_err(|_| {
                    AppError::BadRequest(format!("Invalid acquired_date: {s}"))
                })
            })
            .transpose()?;

        let price = self
            .price
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(|s| {
                s.parse::<i64>()
                    .map_err(|_| AppError::BadRequest(format!("Invalid price: {s}")))
            })
            .transpose()?;

        Ok(CreateClothingItem {
            name,
            category,
            color: self.color.clone().filter(|s| !s.is_empty()),
            notes: self.notes.clone().filter(|s| !s.is_empty()),
            acquired_date,
            price,
        })
    }
}

fn form_image(form: &ItemForm) -> Option<&[u8]> {
    form.image.as_deref().filter(|b| !b.is_empty())
}
