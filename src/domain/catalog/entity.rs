//! Response shapes the client depends on
//!
//! These mirror the JSON bodies returned by the remote catalog API. Only the
//! fields the client actually reads are modeled; unknown fields are ignored
//! on deserialization.

use serde::{Deserialize, Serialize};

/// A top-level resource category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// A tag attached to resources; the canonical stored form is lowercase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: u64,
    pub name: String,
}

impl Tag {
    /// Lowercase form used for all matching and comparison
    pub fn canonical_name(&self) -> String {
        self.name.to_lowercase()
    }
}

/// A curated learning resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: u64,
    pub title: String,
    pub url: String,
    pub category_id: u64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub votes: i64,
}

/// A bookmark tying the current user to a resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: u64,
    pub resource_id: u64,
}

/// The current user's profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: u64,
    pub username: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_deserializes_with_missing_optionals() {
        let json = r#"{"id": 1, "title": "The Book", "url": "https://example.com", "category_id": 3}"#;
        let resource: Resource = serde_json::from_str(json).unwrap();

        assert_eq!(resource.id, 1);
        assert!(resource.tags.is_empty());
        assert_eq!(resource.votes, 0);
        assert_eq!(resource.description, None);
    }

    #[test]
    fn test_resource_ignores_unknown_fields() {
        let json = r#"{"id": 1, "title": "t", "url": "u", "category_id": 2, "created_by": "someone"}"#;
        let resource: Resource = serde_json::from_str(json).unwrap();
        assert_eq!(resource.category_id, 2);
    }

    #[test]
    fn test_tag_canonical_name() {
        let tag = Tag {
            id: 1,
            name: "Rust".to_string(),
        };
        assert_eq!(tag.canonical_name(), "rust");
    }
}
