//! Handlers for the `/user` saved-items resource.
//!
//! Each handler translates one HTTP verb into one repository call for the
//! caller's collection. Errors are returned raw and shaped by [`AppError`].

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use saved_items_core::saved_items::validate_collection;
use saved_items_db::models::saved_item::SavedItem;

use crate::error::{AppError, AppResult};
use crate::middleware::identity::RequestContext;
use crate::response::MessageResponse;
use crate::state::AppState;

/// Message returned after a successful PUT.
pub const SAVED_MESSAGE: &str = "successfully saved items";

/// Message returned after a successful DELETE.
pub const DELETED_MESSAGE: &str = "successfully deleted saved items";

/// GET /svc/saved-items/user
///
/// Return the caller's saved items.
pub async fn get_items(
    ctx: RequestContext,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<SavedItem>>> {
    let items = state.repo.get(ctx.user_id).await?;
    Ok(Json(items))
}

/// PUT /svc/saved-items/user
///
/// Replace the caller's collection with the JSON array in the body.
pub async fn put_items(
    ctx: RequestContext,
    State(state): State<AppState>,
    body: Result<Json<Vec<SavedItem>>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(items) = body.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    validate_collection(items.iter().map(|item| item.id.as_str()))?;

    state.repo.put(ctx.user_id, &items).await?;

    tracing::info!(user_id = %ctx.user_id, count = items.len(), "Saved items replaced");

    Ok((StatusCode::CREATED, Json(MessageResponse::new(SAVED_MESSAGE))))
}

/// DELETE /svc/saved-items/user
///
/// Remove every item of the caller's collection.
pub async fn delete_items(
    ctx: RequestContext,
    State(state): State<AppState>,
) -> AppResult<Json<MessageResponse>> {
    state.repo.delete(ctx.user_id).await?;

    tracing::info!(user_id = %ctx.user_id, "Saved items deleted");

    Ok(Json(MessageResponse::new(DELETED_MESSAGE)))
}
