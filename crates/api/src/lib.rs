//! Saved-items API server library.
//!
//! Exposes the building blocks (config, state, error shaping, identity gate,
//! routes) so integration tests and the binary entrypoint share one router.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
