pub mod health;
pub mod saved_items;

/// Path prefix every saved-items route is nested under.
pub const SERVICE_PREFIX: &str = "/svc/saved-items";
