pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::{DbErr, SqlErr};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Standard error response structure.
///
/// Returned for every error response:
/// - `code`: Integer error code for logging/monitoring (e.g., 1008)
/// - `error`: Machine-readable error identifier (e.g., "CONFLICT")
/// - `message`: Human-readable error message
/// - `details`: Optional additional error details
///
/// # JSON Example
///
/// ```json
/// {
///   "code": 1008,
///   "error": "CONFLICT",
///   "message": "Product with barcode '123' already exists"
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Integer error code for logging and monitoring
    pub code: i32,
    /// Machine-readable error identifier for programmatic handling
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Optional structured error details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.code(),
            error: code.as_str().to_string(),
            message: message.into(),
            details: None,
        }
    }
}

/// Application error type that can be converted to HTTP responses.
///
/// Domain crates convert their own error enums into this type so every
/// service renders failures the same way.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Invalid id: {0}")]
    InvalidId(String),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),
}

impl AppError {
    /// Status code and error code this error renders with.
    pub fn status_and_code(&self) -> (StatusCode, ErrorCode) {
        match self {
            AppError::Database(e) => map_db_error(e),
            AppError::JsonExtractorRejection(e) => (e.status(), ErrorCode::JsonExtraction),
            AppError::InvalidId(_) => (StatusCode::BAD_REQUEST, ErrorCode::InvalidId),
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, ErrorCode::BadRequest),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, ErrorCode::NotFound),
            AppError::Conflict(_) => (StatusCode::CONFLICT, ErrorCode::Conflict),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let message = match self {
            AppError::Database(e) => {
                tracing::error!(error_code = code.code(), "Database error: {:?}", e);
                code.default_message().to_string()
            }
            AppError::JsonExtractorRejection(e) => {
                tracing::warn!(error_code = code.code(), "JSON extraction error: {:?}", e);
                e.body_text()
            }
            AppError::InvalidId(raw) => {
                tracing::info!(error_code = code.code(), "Invalid id: {}", raw);
                format!("{}: '{}'", code.default_message(), raw)
            }
            AppError::BadRequest(msg) => {
                tracing::info!(error_code = code.code(), "Bad request: {}", msg);
                msg
            }
            AppError::NotFound(msg) => {
                tracing::info!(error_code = code.code(), "Not found: {}", msg);
                msg
            }
            AppError::Conflict(msg) => {
                tracing::info!(error_code = code.code(), "Conflict: {}", msg);
                msg
            }
        };

        error_response(status, message, code)
    }
}

/// Maps a SeaORM error to its response status and error code.
fn map_db_error(error: &DbErr) -> (StatusCode, ErrorCode) {
    if let Some(SqlErr::UniqueConstraintViolation(_)) = error.sql_err() {
        return (StatusCode::CONFLICT, ErrorCode::Conflict);
    }

    match error {
        DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => {
            (StatusCode::NOT_FOUND, ErrorCode::DatabaseNotFound)
        }
        DbErr::ConnectionAcquire(_) | DbErr::Conn(_) => {
            (StatusCode::SERVICE_UNAVAILABLE, ErrorCode::DatabaseUnavailable)
        }
        DbErr::Migration(_) => (StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::MigrationError),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::DatabaseError),
    }
}

/// Helper function to create error responses.
///
/// ```rust,ignore
/// use axum_helpers::errors::{error_response, ErrorCode};
/// use axum::http::StatusCode;
///
/// let response = error_response(
///     StatusCode::NOT_FOUND,
///     "Product 7 not found".to_string(),
///     ErrorCode::NotFound,
/// );
/// ```
pub fn error_response(status: StatusCode, message: String, error_code: ErrorCode) -> Response {
    (status, Json(ErrorResponse::new(error_code, message))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::RuntimeErr;

    #[test]
    fn test_app_error_status_codes() {
        assert_eq!(
            AppError::NotFound("x".into()).status_and_code(),
            (StatusCode::NOT_FOUND, ErrorCode::NotFound)
        );
        assert_eq!(
            AppError::Conflict("x".into()).status_and_code(),
            (StatusCode::CONFLICT, ErrorCode::Conflict)
        );
        assert_eq!(
            AppError::InvalidId("abc".into()).status_and_code(),
            (StatusCode::BAD_REQUEST, ErrorCode::InvalidId)
        );
    }

    #[test]
    fn test_db_errors_map_to_statuses() {
        assert_eq!(
            AppError::from(DbErr::RecordNotUpdated).status_and_code().0,
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::from(DbErr::Conn(RuntimeErr::Internal("refused".into())))
                .status_and_code()
                .0,
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            AppError::from(DbErr::Custom("boom".into()))
                .status_and_code()
                .0,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_response_skips_empty_details() {
        let body = serde_json::to_value(ErrorResponse::new(ErrorCode::NotFound, "gone")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "code": 1004,
                "error": "NOT_FOUND",
                "message": "gone"
            })
        );
    }

    #[test]
    fn test_database_error_hides_detail() {
        let response = AppError::Database(DbErr::Custom("secret detail".into())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
