use std::sync::Arc;

use leadtracker_core::auth::CredentialVerifier;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: leadtracker_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Credential checker behind the login endpoint. A trait object so a
    /// real identity backend can replace the static pair.
    pub credentials: Arc<dyn CredentialVerifier>,
}
