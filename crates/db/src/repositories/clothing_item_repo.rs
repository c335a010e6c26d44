//! Repository for the `clothes` table.

use closetlog_core::types::DbId;
use sqlx::PgPool;

use crate::models::clothing_item::{ClothingItem, CreateClothingItem, UpdateClothingItem};

/// Column list for `clothes` queries.
const ITEM_COLUMNS: &str = "\
    id, user_id, name, category, color, image_url, notes, \
    acquired_date, price, created_at";

/// Provides owner-scoped CRUD for clothing items.
pub struct ClothingItemRepo;

impl ClothingItemRepo {
    /// Insert a new item for the user and return the stored row.
    ///
    /// `image_url` is the already-uploaded object reference, if any; the
    /// upload itself happens before this call.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateClothingItem,
        image_url: Option<&str>,
    ) -> Result<ClothingItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO clothes \
                 (user_id, name, category, color, image_url, notes, acquired_date, price) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {ITEM_COLUMNS}"
        );
        sqlx::query_as::<_, ClothingItem>(&query)
            .bind(user_id)
            .bind(&input.name)
            .bind(input.category.as_str())
            .bind(input.color.as_deref())
            .bind(image_url)
            .bind(input.notes.as_deref())
            .bind(input.acquired_date)
            .bind(input.price)
            .fetch_one(pool)
            .await
    }

    /// Find an item by id, scoped to its owner.
    pub async fn find_by_id(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
    ) -> Result<Option<ClothingItem>, sqlx::Error> {
        let query = format!("SELECT {ITEM_COLUMNS} FROM clothes WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, ClothingItem>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// List all of a user's items, newest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<ClothingItem>, sqlx::Error> {
        let query = format!(
            "SELECT {ITEM_COLUMNS} FROM clothes \
             WHERE user_id = $1 \
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, ClothingItem>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Apply a partial field patch to an item.
    ///
    /// `name` and `category` are non-nullable and use COALESCE; the nullable
    /// columns carry a presence flag so a patch can clear them to NULL
    /// rather than only overwrite them.
    ///
    /// Returns `None` if the id does not exist or is not owned by the user.
    pub async fn update(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
        patch: &UpdateClothingItem,
    ) -> Result<Option<ClothingItem>, sqlx::Error> {
        let query = format!(
            "UPDATE clothes SET \
                 name = COALESCE($3, name), \
                 category = COALESCE($4, category), \
                 color = CASE WHEN $5 THEN $6 ELSE color END, \
                 notes = CASE WHEN $7 THEN $8 ELSE notes END, \
                 acquired_date = CASE WHEN $9 THEN $10 ELSE acquired_date END, \
                 price = CASE WHEN $11 THEN $12 ELSE price END \
             WHERE id = $1 AND user_id = $2 \
             RETURNING {ITEM_COLUMNS}"
        );
        sqlx::query_as::<_, ClothingItem>(&query)
            .bind(id)
            .bind(user_id)
            .bind(patch.name.as_deref())
            .bind(patch.category.map(|c| c.as_str()))
            .bind(patch.color.is_some())
            .bind(patch.color.as_ref().and_then(|c| c.as_deref()))
            .bind(patch.notes.is_some())
            .bind(patch.notes.as_ref().and_then(|n| n.as_deref()))
            .bind(patch.acquired_date.is_some())
            .bind(patch.acquired_date.flatten())
            .bind(patch.price.is_some())
            .bind(patch.price.flatten())
            .fetch_optional(pool)
            .await
    }

    /// Delete an item. Ledger rows cascade via foreign keys.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, user_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM clothes WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
