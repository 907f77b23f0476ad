//! Domain model structs and DTOs.

pub mod saved_item;
