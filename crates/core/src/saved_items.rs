//! Limits and validation for a user's saved-items collection.
//!
//! Used by the API layer before a PUT replaces the stored collection.

use std::collections::HashSet;

use crate::error::CoreError;

/// Maximum length of an item identifier, in bytes.
pub const MAX_ITEM_ID_LEN: usize = 255;

/// Maximum number of items a single user may keep.
pub const MAX_ITEMS_PER_USER: usize = 1000;

/// Validate a single item identifier.
pub fn validate_item_id(id: &str) -> Result<(), CoreError> {
    if id.is_empty() {
        return Err(CoreError::Validation("item id must not be empty".into()));
    }
    if id.len() > MAX_ITEM_ID_LEN {
        return Err(CoreError::Validation(format!(
            "item id exceeds {MAX_ITEM_ID_LEN} bytes"
        )));
    }
    Ok(())
}

/// Validate the identifiers of a full replacement collection.
///
/// Checks the collection size, each id, and that no id appears twice.
pub fn validate_collection<'a, I>(ids: I) -> Result<(), CoreError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for id in ids {
        validate_item_id(id)?;
        if !seen.insert(id) {
            return Err(CoreError::Validation(format!("duplicate item id '{id}'")));
        }
        if seen.len() > MAX_ITEMS_PER_USER {
            return Err(CoreError::Validation(format!(
                "collection exceeds {MAX_ITEMS_PER_USER} items"
            )));
        }
    }
    Ok(())
}
