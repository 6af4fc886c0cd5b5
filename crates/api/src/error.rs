use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use newsroom_core::error::CoreError;
use newsroom_db::DbError;

use crate::response::ErrorBody;

/// Client-facing message for every 500-class failure.
pub const SERVER_ERROR_MESSAGE: &str = "Server error";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain failures (including internal faults, which
/// surface as [`CoreError::Internal`]) and carries raw store errors that have
/// no domain meaning. Implements [`IntoResponse`] to produce consistent
/// `{ "msg": ..., "code": ... }` bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `newsroom_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error the repository layer could not classify.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<DbError> for AppError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::Core(core) => AppError::Core(core),
            DbError::Store(sqlx_err) => AppError::Database(sqlx_err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, msg) = match &self {
            AppError::Core(core) => classify_core_error(core),

            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                server_error()
            }
        };

        (status, axum::Json(ErrorBody { msg, code })).into_response()
    }
}

/// Map a domain failure to its HTTP status, error code, and message.
///
/// A missing foreign-key target is reported as 404, the same as a missing
/// row, whichever endpoint it arrives through.
fn classify_core_error(err: &CoreError) -> (StatusCode, &'static str, String) {
    match err {
        CoreError::NotFound { .. } => (StatusCode::NOT_FOUND, "NOT_FOUND", err.to_string()),
        CoreError::ReferenceError { .. } => {
            (StatusCode::NOT_FOUND, "REFERENCE_ERROR", err.to_string())
        }
        CoreError::InvalidQueryProperty(_) => (
            StatusCode::BAD_REQUEST,
            "INVALID_QUERY_PROPERTY",
            err.to_string(),
        ),
        CoreError::InvalidQueryParameter { .. } => (
            StatusCode::BAD_REQUEST,
            "INVALID_QUERY_PARAMETER",
            err.to_string(),
        ),
        CoreError::InvalidInput(_) => (StatusCode::BAD_REQUEST, "INVALID_INPUT", err.to_string()),
        CoreError::MalformedIdentifier { .. } => (
            StatusCode::BAD_REQUEST,
            "MALFORMED_IDENTIFIER",
            err.to_string(),
        ),
        CoreError::Internal(msg) => {
            tracing::error!(error = %msg, "Internal core error");
            server_error()
        }
    }
}

fn server_error() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        SERVER_ERROR_MESSAGE.to_string(),
    )
}
