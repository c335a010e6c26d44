//! Wear record routes, mounted at `/wear-records`.
//!
//! ```text
//! DELETE /{id} -> delete_wear_record
//! ```

use axum::routing::delete;
use axum::Router;

use crate::handlers::wear;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/{id}", delete(wear::delete_wear_record))
}
