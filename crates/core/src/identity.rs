//! Parsing of the trusted identity header injected by the API gateway.
//!
//! The gateway has already authenticated the caller; this layer only checks
//! that the asserted identity is a well-formed, non-zero base-10 integer.

use crate::types::UserId;

/// Default name of the header carrying the caller's identity.
pub const DEFAULT_IDENTITY_HEADER: &str = "USER_ID";

/// Parse a raw header value into a [`UserId`].
///
/// Accepts ASCII digits only: no sign, no whitespace, no separators. Empty
/// values, values that overflow `u64`, and zero all yield `None`. Callers
/// do not get to distinguish between these cases.
pub fn parse_user_id(raw: &str) -> Option<UserId> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse::<u64>().ok().and_then(UserId::new)
}

/// Like [`parse_user_id`] but starting from raw header bytes.
///
/// Non-UTF-8 input is rejected the same way as any other malformed value.
pub fn parse_user_id_bytes(raw: &[u8]) -> Option<UserId> {
    std::str::from_utf8(raw).ok().and_then(parse_user_id)
}
