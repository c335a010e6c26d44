//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. All queries are scoped to
//! the owning user; no cross-user access is possible through this layer.

pub mod clothing_item_repo;
pub mod refresh_record_repo;
pub mod wear_record_repo;

pub use clothing_item_repo::ClothingItemRepo;
pub use refresh_record_repo::RefreshRecordRepo;
pub use wear_record_repo::WearRecordRepo;
