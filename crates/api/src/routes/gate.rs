//! Access gate routes, mounted at `/auth`.
//!
//! The only public route besides the health check.
//!
//! ```text
//! POST /verify-code -> verify_code
//! ```

use axum::routing::post;
use axum::Router;

use crate::handlers::gate;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/verify-code", post(gate::verify_code))
}
