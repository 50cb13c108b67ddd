//! Handler for the `/api/auth` login gate.

use axum::extract::State;
use axum::Json;
use leadtracker_core::error::CoreError;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Request body for `POST /api/auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Authenticated principal echoed back on success.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub email: String,
}

/// POST /api/auth/login
///
/// Session-less credential check: a success carries no token and grants
/// nothing beyond the 200 itself. Lead routes stay public.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<ApiResponse<LoginResponse>>> {
    let valid = state.credentials.verify(&input.email, &input.password).await?;

    if !valid {
        return Err(CoreError::Unauthorized("Invalid email or password".to_string()).into());
    }

    Ok(Json(ApiResponse::success_with_message(
        "Login successful",
        LoginResponse { email: input.email },
    )))
}
