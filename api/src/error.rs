//! Central mapping from failure kinds to HTTP responses.
//!
//! Every handler returns `Result<_, ApiError>`; the `IntoResponse` impl is
//! the single place a failure kind becomes a status code and envelope.
//! Lower-layer error text (SeaORM, sqlx) is logged here and never reaches
//! the client.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use sea_orm::DbErr;
use thiserror::Error;

use crate::response::ApiResponse;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Client-supplied data violates a constraint. Always reported before
    /// any persistence attempt.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The persistence layer malfunctioned. The underlying `DbErr` has
    /// already been logged by the `From` impl below.
    #[error("database error")]
    Database,

    /// Anything not otherwise categorized.
    #[error("internal server error")]
    Internal,

    /// An application-raised failure with its own 4xx status, e.g. a
    /// missing record on a future read-by-id endpoint.
    #[error("not found: {0}")]
    NotFound(String),
}

impl From<DbErr> for ApiError {
    fn from(err: DbErr) -> Self {
        tracing::error!(error = %err, "database operation failed");
        ApiError::Database
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            ApiError::Validation(detail) => {
                let message = format!("Validation failed: {detail}");
                (StatusCode::UNPROCESSABLE_ENTITY, detail, message)
            }
            ApiError::Database => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Database error".to_string(),
                "An error occurred while processing your request".to_string(),
            ),
            ApiError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
                "An unexpected error occurred".to_string(),
            ),
            ApiError::NotFound(detail) => {
                let message = format!("Request failed: {detail}");
                (StatusCode::NOT_FOUND, detail, message)
            }
        };

        (status, Json(ApiResponse::<()>::error(error, message))).into_response()
    }
}
