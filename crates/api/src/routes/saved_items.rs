//! Route definitions for the saved-items resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::{fallback, saved_items};
use crate::state::AppState;

/// Saved-items routes, mounted at [`super::SERVICE_PREFIX`].
///
/// ```text
/// GET    /user -> get_items
/// PUT    /user -> put_items
/// DELETE /user -> delete_items
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/user",
        get(saved_items::get_items)
            .put(saved_items::put_items)
            .delete(saved_items::delete_items)
            .fallback(fallback::method_not_allowed),
    )
}
