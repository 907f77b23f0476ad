use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use saved_items_core::error::{CoreError, ErrorDescriptor, ErrorKind, SERVICE_UNAVAILABLE};
use saved_items_db::RepoError;

use crate::response::ErrorResponse;

/// Application-level error type for HTTP handlers.
///
/// Handlers return raw errors; [`IntoResponse`] is the only place that decides
/// what crosses to the client. Unauthorized passes through with its fixed
/// message. Every other variant is logged with its full cause and replaced by
/// the fixed 503 descriptor.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `saved_items_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A failure reported by the saved-items repository.
    #[error(transparent)]
    Repository(#[from] RepoError),

    /// The request could not be decoded.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// The client-facing descriptor this error is shaped into.
    pub fn descriptor(&self) -> ErrorDescriptor {
        match self {
            AppError::Core(core) => core.descriptor(),
            AppError::Repository(_) | AppError::BadRequest(_) | AppError::InternalError(_) => {
                SERVICE_UNAVAILABLE
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let descriptor = self.descriptor();
        match descriptor.kind {
            ErrorKind::Unauthorized => {
                tracing::debug!("Rejected request without a valid identity");
            }
            ErrorKind::Unavailable => {
                tracing::error!(error = %self, "unexpected service error");
            }
        }
        descriptor_response(descriptor)
    }
}

/// HTTP status for each externally visible error kind.
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorKind::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
    }
}

/// Render a descriptor as its status plus `{ "error": message }`.
pub fn descriptor_response(descriptor: ErrorDescriptor) -> Response {
    (
        status_for(descriptor.kind),
        Json(ErrorResponse::new(descriptor.message)),
    )
        .into_response()
}
