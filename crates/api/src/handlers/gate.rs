//! Access gate handler.
//!
//! The app sits behind a single shared invite code. Verifying the code is
//! the only public endpoint besides the health check; everything else
//! requires a JWT.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct VerifyCodeRequest {
    pub code: String,
}

#[derive(Debug, Serialize)]
pub struct VerifyCodeResponse {
    pub success: bool,
}

/// POST /api/v1/auth/verify-code
///
/// Compare the submitted code against the server-held access code,
/// case-insensitively. Wrong codes get 401 with `{"success": false}` so the
/// client can distinguish "wrong code" from transport failures.
pub async fn verify_code(
    State(state): State<AppState>,
    Json(input): Json<VerifyCodeRequest>,
) -> AppResult<impl IntoResponse> {
    let matches = input.code.to_lowercase() == state.config.access_code.to_lowercase();

    let status = if matches {
        StatusCode::OK
    } else {
        tracing::info!("Access code verification failed");
        StatusCode::UNAUTHORIZED
    };

    Ok((status, Json(VerifyCodeResponse { success: matches })))
}
