/// Error handling for the API server
///
/// This module provides a unified error type that maps to HTTP responses.
/// All handlers return `Result<T, ApiError>`, so a missing record or a bad
/// request body becomes a JSON error response instead of a failed request.
///
/// # Response Body
///
/// ```json
/// { "error": "User 42 not found", "code": "not_found" }
/// ```
///
/// # Example
///
/// ```
/// use gigboard_api::error::{ApiError, ApiResult};
///
/// fn require(found: Option<u32>) -> ApiResult<u32> {
///     found.ok_or_else(|| ApiError::NotFound("Widget not found".to_string()))
/// }
///
/// assert!(require(None).is_err());
/// ```

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use gigboard_shared::models::date::DateError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// API result type alias
pub type ApiResult<T> = Result<T, ApiError>;

/// Unified API error type
#[derive(Debug)]
pub enum ApiError {
    /// Bad request (400) - malformed body, missing field, bad date
    BadRequest(String),

    /// Not found (404)
    NotFound(String),

    /// Conflict (409) - e.g., duplicate email
    Conflict(String),

    /// Internal server error (500)
    InternalError(String),
}

/// Error response format
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,

    /// Error code (e.g., "bad_request", "not_found")
    pub code: String,
}

impl ApiError {
    /// Not-found error for a table row
    pub fn not_found(entity: &str, id: i64) -> Self {
        ApiError::NotFound(format!("{} {} not found", entity, id))
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            ApiError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, "conflict", msg),
            ApiError::InternalError(msg) => {
                // Log internal errors but don't expose details to clients
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: message,
            code: code.to_string(),
        });

        (status, body).into_response()
    }
}

/// Convert sqlx errors to API errors
impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => ApiError::NotFound("Resource not found".to_string()),
            sqlx::Error::Database(db_err) => {
                if db_err.is_unique_violation() {
                    // SQLite reports "UNIQUE constraint failed: users.email"
                    let message = db_err.message();
                    if message.contains("email") {
                        return ApiError::Conflict("Email already exists".to_string());
                    }
                    if message.contains("address") {
                        return ApiError::Conflict("Address already exists".to_string());
                    }
                    return ApiError::Conflict(format!("Constraint violation: {}", message));
                }

                ApiError::InternalError(format!("Database error: {}", db_err))
            }
            _ => ApiError::InternalError(format!("Database error: {}", err)),
        }
    }
}

/// Convert date parsing errors to API errors
impl From<DateError> for ApiError {
    fn from(err: DateError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

/// Convert JSON body rejections (bad syntax, missing field, wrong content type)
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

/// Convert path rejections (e.g. `/users/abc`)
impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}
