//! Request gating extractors.
//!
//! - [`identity::RequestContext`] -- Extracts the caller's identity from the
//!   trusted gateway header, rejecting with 401 when it is missing or invalid.

pub mod identity;
