//! Enveloped responses for requests that match no handler.

use axum::http::StatusCode;
use axum::Json;

use crate::response::ErrorResponse;

/// Error text for paths outside the route tree.
pub const NOT_FOUND_MESSAGE: &str = "resource not found";
/// Error text for known paths hit with an unsupported method.
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "method not allowed";

/// Router fallback: 404 with `{ "error": NOT_FOUND_MESSAGE }`.
pub async fn not_found() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new(NOT_FOUND_MESSAGE)),
    )
}

/// Per-route method fallback: 405 with `{ "error": METHOD_NOT_ALLOWED_MESSAGE }`.
pub async fn method_not_allowed() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorResponse::new(METHOD_NOT_ALLOWED_MESSAGE)),
    )
}
