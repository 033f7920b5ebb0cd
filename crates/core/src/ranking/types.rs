use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Scores of an entry keyed by attribute name.
///
/// Keys are free-form; nothing ties them to the attributes of the rank.
pub type Scores = BTreeMap<String, i64>;

/// A named, ordered collection of attributes and entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rank {
    pub id: String,
    pub name: String,
    pub public: bool,
}

impl Rank {
    /// Creates a new rank with a freshly generated ID.
    pub fn new(name: impl Into<String>, public: bool) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            public,
        }
    }

    /// Sets a specific ID for this rank (useful for testing).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}

/// A scoring dimension of a rank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Display position inside the rank table, ascending.
    pub order: i64,
    pub rank_id: String,
}

impl Attribute {
    /// Creates a new attribute with a freshly generated ID.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        order: i64,
        rank_id: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            description: description.into(),
            order,
            rank_id: rank_id.into(),
        }
    }

    /// Sets a specific ID for this attribute (useful for testing).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}

/// A scored item of a rank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub scores: Scores,
    pub rank_id: String,
}

impl Entry {
    /// Creates a new entry with a freshly generated ID.
    pub fn new(
        name: impl Into<String>,
        image_url: impl Into<String>,
        scores: Scores,
        rank_id: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            image_url: image_url.into(),
            scores,
            rank_id: rank_id.into(),
        }
    }

    /// Sets a specific ID for this entry (useful for testing).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}

/// Read-side view joining a rank with its attributes and entries.
///
/// Attributes are sorted by `order` and entries by `name`. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankTable {
    pub id: String,
    pub name: String,
    pub public: bool,
    pub attributes: Vec<Attribute>,
    pub entries: Vec<Entry>,
}
