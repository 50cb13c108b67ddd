//! Route tree assembly.

pub mod auth;
pub mod health;
pub mod leads;

use axum::http::StatusCode;
use axum::Json;
use axum::Router;

use crate::response::ApiResponse;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /leads                 list, create
/// /leads/stats           aggregated counts
/// /leads/{id}            get, update, delete
/// /leads/{id}/status     status-only update
///
/// /auth/login            credential check (public, session-less)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/leads", leads::router())
        .nest("/auth", auth::router())
}

/// Fallback for unmatched paths: the failure envelope instead of a bare 404.
pub async fn not_found() -> (StatusCode, Json<ApiResponse<()>>) {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::failure("Route not found")),
    )
}
