use axum::{http::StatusCode, response::Response};

use super::{ErrorCode, error_response};

/// Fallback for unmatched routes.
pub async fn not_found() -> Response {
    let code = ErrorCode::RouteNotFound;
    error_response(StatusCode::NOT_FOUND, code.default_message().to_string(), code)
}
