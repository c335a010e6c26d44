//! Route definitions.
//!
//! [`api_routes`] assembles everything mounted under `/api/v1`; the health
//! check lives at the root level and is merged separately.

use axum::Router;

use crate::state::AppState;

pub mod closet;
pub mod gate;
pub mod health;
pub mod ranking;
pub mod wear_records;

/// All routes mounted under `/api/v1`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", gate::router())
        .nest("/closet", closet::router())
        .nest("/wear-records", wear_records::router())
        .nest("/ranking", ranking::router())
}
