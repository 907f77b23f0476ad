//! Saved item model.
//!
//! The same struct is the database row, the PUT payload element, and the GET
//! response element. Optional fields are omitted from JSON when absent.

use saved_items_core::types::Timestamp;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One entry in a user's saved-items collection.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct SavedItem {
    /// Client-chosen identifier, unique within the owning user's collection.
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Assigned by the store; ignored on input.
    #[serde(default, skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<Timestamp>,
}

impl SavedItem {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: None,
            saved_at: None,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_item_serializes_without_optional_fields() {
        let json = serde_json::to_value(vec![SavedItem::new("a")]).unwrap();
        assert_eq!(json, serde_json::json!([{ "id": "a" }]));
    }

    #[test]
    fn saved_at_is_ignored_on_input() {
        let item: SavedItem = serde_json::from_value(serde_json::json!({
            "id": "a",
            "url": "https://example.com/a",
            "saved_at": "2020-01-01T00:00:00Z",
        }))
        .unwrap();
        assert_eq!(item, SavedItem::new("a").with_url("https://example.com/a"));
    }
}
