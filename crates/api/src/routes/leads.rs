//! Route definitions for the `/api/leads` resource.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::leads;
use crate::state::AppState;

/// Routes mounted at `/api/leads`.
///
/// ```text
/// GET    /               -> list
/// POST   /               -> create
/// GET    /stats          -> stats
/// GET    /{id}           -> get_by_id
/// PUT    /{id}           -> update
/// DELETE /{id}           -> delete
/// PATCH  /{id}/status    -> update_status
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(leads::list).post(leads::create))
        .route("/stats", get(leads::stats))
        .route(
            "/{id}",
            get(leads::get_by_id)
                .put(leads::update)
                .delete(leads::delete),
        )
        .route("/{id}/status", patch(leads::update_status))
}
