//! Closet routes, mounted at `/closet`.
//!
//! ```text
//! GET    /               -> list_items
//! POST   /               -> create_item (multipart)
//! GET    /stats          -> closet_stats
//! GET    /{id}           -> get_item
//! PATCH  /{id}           -> update_item
//! DELETE /{id}           -> delete_item
//! POST   /{id}/wear      -> record_wear
//! GET    /{id}/history   -> item_history
//! POST   /{id}/refresh   -> record_refresh
//! GET    /{id}/stats     -> item_stats
//! ```
//!
//! `/stats` is registered before `/{id}` so the literal segment wins.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{items, refresh, stats, wear};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(items::list_items).post(items::create_item))
        .route("/stats", get(stats::closet_stats))
        .route(
            "/{id}",
            get(items::get_item)
                .patch(items::update_item)
                .delete(items::delete_item),
        )
        .route("/{id}/wear", post(wear::record_wear))
        .route("/{id}/history", get(wear::item_history))
        .route("/{id}/refresh", post(refresh::record_refresh))
        .route("/{id}/stats", get(stats::item_stats))
}
