//! JSON envelopes shared by every endpoint.
//!
//! A response body is either `{ "message": ... }` or `{ "error": ... }`.
//! The only exception is a successful GET of the collection, which returns
//! the items themselves.

use serde::Serialize;

/// Success or informational envelope: `{ "message": "..." }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub const fn new(message: &'static str) -> Self {
        Self { message }
    }
}

/// Failure envelope: `{ "error": "..." }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
}

impl ErrorResponse {
    pub const fn new(error: &'static str) -> Self {
        Self { error }
    }
}
