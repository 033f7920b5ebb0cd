//! API request bodies for rank, attribute and entry operations.
//!
//! The rank id and the entity id always come from the URL path, so the bodies
//! only carry the mutable fields. Unknown fields are rejected; missing fields
//! fall back to their zero value and are left to the validator.

use serde::{Deserialize, Serialize};

use super::types::{Attribute, Entry, Rank, Scores};

/// Request payload for creating or replacing a rank.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RankRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub public: bool,
}

impl RankRequest {
    /// Builds a new rank with a freshly generated ID.
    pub fn into_rank(self) -> Rank {
        Rank::new(self.name, self.public)
    }

    /// Builds the full replacement for an existing rank.
    pub fn into_rank_with_id(self, id: impl Into<String>) -> Rank {
        self.into_rank().with_id(id)
    }
}

/// Request payload for creating or replacing an attribute.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AttributeRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub order: i64,
}

impl AttributeRequest {
    pub fn into_attribute(self, rank_id: impl Into<String>) -> Attribute {
        Attribute::new(self.name, self.description, self.order, rank_id)
    }

    pub fn into_attribute_with_id(
        self,
        rank_id: impl Into<String>,
        id: impl Into<String>,
    ) -> Attribute {
        self.into_attribute(rank_id).with_id(id)
    }
}

/// Request payload for creating or replacing an entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EntryRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub scores: Scores,
}

impl EntryRequest {
    pub fn into_entry(self, rank_id: impl Into<String>) -> Entry {
        Entry::new(self.name, self.image_url, self.scores, rank_id)
    }

    pub fn into_entry_with_id(self, rank_id: impl Into<String>, id: impl Into<String>) -> Entry {
        self.into_entry(rank_id).with_id(id)
    }
}
