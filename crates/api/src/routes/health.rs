use axum::extract::State;
use axum::{routing::get, Json, Router};

use crate::error::AppResult;
use crate::handlers::fallback;
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /health -- `{"message":"ok"}` while the store answers, 503 otherwise.
async fn health_check(State(state): State<AppState>) -> AppResult<Json<MessageResponse>> {
    state.repo.ping().await?;
    Ok(Json(MessageResponse::new("ok")))
}

/// Mount health check routes (root level, outside the service prefix).
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/health",
        get(health_check).fallback(fallback::method_not_allowed),
    )
}
