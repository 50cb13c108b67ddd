use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use leadtracker_core::error::CoreError;

use crate::response::ApiResponse;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the standard failure envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `leadtracker_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The path identifier is not a valid lead id.
    #[error("Invalid lead ID format")]
    BadId,

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body): (StatusCode, ApiResponse<()>) = match self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity } => (
                    StatusCode::NOT_FOUND,
                    ApiResponse::failure(format!("{entity} not found")),
                ),
                CoreError::Validation(errors) => (
                    StatusCode::BAD_REQUEST,
                    ApiResponse::failure("Validation Error").with_errors(errors),
                ),
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, ApiResponse::failure(msg))
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        ApiResponse::failure("An internal error occurred"),
                    )
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(&err),

            // --- HTTP-specific errors ---
            AppError::BadId => (
                StatusCode::BAD_REQUEST,
                ApiResponse::failure("Invalid lead ID format"),
            ),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ApiResponse::failure(msg)),
        };

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status and failure envelope.
///
/// - `RowNotFound` maps to 404.
/// - A unique violation on a `uq_leads_*` index maps to 400 naming the
///   duplicated field.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, ApiResponse<()>) {
    match err {
        sqlx::Error::RowNotFound => {
            (StatusCode::NOT_FOUND, ApiResponse::failure("Lead not found"))
        }
        sqlx::Error::Database(db_err) => {
            // PostgreSQL unique constraint violation: error code 23505
            if db_err.code().as_deref() == Some("23505") {
                if let Some(field) = db_err.constraint().and_then(|c| c.strip_prefix("uq_leads_"))
                {
                    return (
                        StatusCode::BAD_REQUEST,
                        ApiResponse::failure(format!("{field} already exists")),
                    );
                }
            }
            tracing::error!(error = %db_err, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiResponse::failure("An internal error occurred"),
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiResponse::failure("An internal error occurred"),
            )
        }
    }
}
