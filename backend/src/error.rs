//! Application error handling
//!
//! `StoreError` is what the persistence layer reports; `ApiError` is what
//! handlers return, converted to an HTTP response with a JSON body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Persistence gateway failures
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Username already exists: {0}")]
    DuplicateUsername(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("No user named {0}")]
    UnknownFriend(String),

    #[error("Already friends with {0}")]
    AlreadyFriends(String),

    #[error("Database error")]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    /// True when the underlying database error is a unique-constraint violation
    pub fn is_unique_violation(err: &sqlx::Error) -> bool {
        matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
    }
}

/// Result type alias for repository calls
pub type StoreResult<T> = Result<T, StoreError>;

/// API error type that can be converted to HTTP responses
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),

    #[error("Database error")]
    Database(#[from] sqlx::Error),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateUsername(_) => {
                ApiError::Conflict("Username already exists".to_string())
            }
            StoreError::NotFound(what) => ApiError::NotFound(what),
            StoreError::UnknownFriend(name) => ApiError::NotFound(format!("No user named '{}'", name)),
            StoreError::AlreadyFriends(name) => {
                ApiError::Conflict(format!("Already friends with '{}'", name))
            }
            StoreError::Database(e) => ApiError::Database(e),
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors
            .field_errors()
            .keys()
            .map(|field| {
                ru_active_shared::validation::get_field_display_label(field).to_string()
            })
            .collect();
        fields.sort();
        fields.dedup();
        ApiError::Validation(format!("Invalid value for: {}", fields.join(", ")))
    }
}

/// Error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone()),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            ApiError::Internal(err) => {
                error!("Internal error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
            ApiError::Database(err) => {
                error!("Database error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "A database error occurred".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message,
            },
        });

        (status, body).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
