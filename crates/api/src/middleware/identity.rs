//! Identity gate for the trusted gateway header.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use saved_items_core::error::CoreError;
use saved_items_core::identity::parse_user_id_bytes;
use saved_items_core::types::UserId;

use crate::error::AppError;
use crate::state::AppState;

/// Request-scoped context attached by the identity gate.
///
/// Declare it as the first handler parameter so the gate runs before any
/// other extractor (in particular before the body is read):
///
/// ```ignore
/// async fn my_handler(ctx: RequestContext) -> AppResult<Json<()>> {
///     tracing::info!(user_id = %ctx.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestContext {
    /// Identity asserted by the upstream gateway. Never zero.
    pub user_id: UserId,
}

impl FromRequestParts<AppState> for RequestContext {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Missing, malformed and zero all collapse into the same rejection.
        let user_id = parts
            .headers
            .get(&state.config.identity_header)
            .and_then(|value| parse_user_id_bytes(value.as_bytes()))
            .ok_or(AppError::Core(CoreError::Unauthorized))?;

        Ok(RequestContext { user_id })
    }
}
