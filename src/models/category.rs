//! Category data structure.

use serde::{Deserialize, Serialize};

/// A store category from the sidebar list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    /// Category unique identifier
    pub id: u64,

    /// Category display name
    pub name: String,

    /// Number of stores scoped to this category
    #[serde(default)]
    pub store_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_with_missing_count() {
        let category: Category = serde_json::from_str(r#"{"id": 3, "name": "Fashion"}"#).unwrap();
        assert_eq!(category.id, 3);
        assert_eq!(category.store_count, 0);
    }
}
