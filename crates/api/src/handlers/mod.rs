pub mod fallback;
pub mod saved_items;
