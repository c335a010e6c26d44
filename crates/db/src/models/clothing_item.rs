//! Clothing item model and DTOs.

use chrono::NaiveDate;
use closetlog_core::category::CategoryId;
use closetlog_core::snapshot::ItemEntry;
use closetlog_core::types::{DbId, Timestamp};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `clothes` table.
///
/// `category` is stored as text; use [`ClothingItem::category_id`] to get
/// the parsed id (unknown values fall back to `other`).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ClothingItem {
    pub id: DbId,
    pub user_id: DbId,
    pub name: String,
    pub category: String,
    pub color: Option<String>,
    pub image_url: Option<String>,
    pub notes: Option<String>,
    pub acquired_date: Option<NaiveDate>,
    pub price: Option<i64>,
    pub created_at: Timestamp,
}

impl ClothingItem {
    /// The parsed category id. Total: unknown stored values map to `other`.
    pub fn category_id(&self) -> CategoryId {
        CategoryId::parse(&self.category)
    }

    /// The item as the statistics engine sees it.
    pub fn as_entry(&self) -> ItemEntry {
        ItemEntry {
            id: self.id,
            category: self.category_id(),
        }
    }
}

/// DTO for creating a new clothing item.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateClothingItem {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub category: CategoryId,
    pub color: Option<String>,
    pub notes: Option<String>,
    pub acquired_date: Option<NaiveDate>,
    pub price: Option<i64>,
}

/// DTO for partially updating a clothing item.
///
/// Absent fields are unchanged. For the nullable columns the outer `Option`
/// is presence and the inner one the new value, so `"color": null` clears
/// the stored color while an omitted `color` leaves it alone. `name` and
/// `category` are not nullable and a JSON `null` there means unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateClothingItem {
    pub name: Option<String>,
    pub category: Option<CategoryId>,
    #[serde(default, deserialize_with = "patch_field")]
    pub color: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch_field")]
    pub notes: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch_field")]
    pub acquired_date: Option<Option<NaiveDate>>,
    #[serde(default, deserialize_with = "patch_field")]
    pub price: Option<Option<i64>>,
}

/// Deserialize a nullable patch field, keeping "absent" (outer `None`) apart
/// from "present but null" (`Some(None)`).
fn patch_field<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
