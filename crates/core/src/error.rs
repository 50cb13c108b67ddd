/// Domain-level error type shared across the workspace.
///
/// Carries no HTTP or database specifics; the API layer maps these onto
/// status codes and response envelopes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// The requested entity does not exist.
    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    /// One or more fields failed validation. Each entry is a
    /// human-readable, per-field message.
    #[error("Validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),

    /// The caller is not authenticated.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// An unexpected internal failure with a human-readable message.
    #[error("Internal error: {0}")]
    Internal(String),
}
