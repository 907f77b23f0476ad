//! Domain building blocks for the saved-items service.
//!
//! Nothing in here performs I/O, so the identity parser, error descriptors and
//! validation rules can be shared by the repository and HTTP layers alike.

pub mod error;
pub mod identity;
pub mod saved_items;
pub mod types;
