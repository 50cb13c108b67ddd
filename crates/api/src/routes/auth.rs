//! Route definitions for the `/api/auth` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Routes mounted at `/api/auth`.
pub fn router() -> Router<AppState> {
    Router::new().route("/login", post(auth::login))
}
