//! Repository layer.
//!
//! [`SavedItemsRepo`] is the seam the HTTP layer depends on; the PostgreSQL
//! implementation lives next to it.

pub mod saved_item_repo;

pub use saved_item_repo::{PgSavedItemsRepo, SavedItemsRepo};
