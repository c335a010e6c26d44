//! Ranking routes, mounted at `/ranking`.
//!
//! ```text
//! GET / -> ranking
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::ranking;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(ranking::ranking))
}
