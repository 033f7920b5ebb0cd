//! Use case outputs, serialized verbatim as JSON response bodies.

use serde::{Deserialize, Serialize};

use crate::ranking::{Attribute, Entry, Rank, RankTable, Scores};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankOutput {
    pub id: String,
    pub name: String,
    pub public: bool,
}

impl From<Rank> for RankOutput {
    fn from(rank: Rank) -> Self {
        Self {
            id: rank.id,
            name: rank.name,
            public: rank.public,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeOutput {
    pub id: String,
    pub name: String,
    pub description: String,
    pub order: i64,
    pub rank_id: String,
}

impl From<Attribute> for AttributeOutput {
    fn from(attribute: Attribute) -> Self {
        Self {
            id: attribute.id,
            name: attribute.name,
            description: attribute.description,
            order: attribute.order,
            rank_id: attribute.rank_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryOutput {
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub scores: Scores,
    pub rank_id: String,
}

impl From<Entry> for EntryOutput {
    fn from(entry: Entry) -> Self {
        Self {
            id: entry.id,
            name: entry.name,
            image_url: entry.image_url,
            scores: entry.scores,
            rank_id: entry.rank_id,
        }
    }
}

/// Attribute row of a rank table. The rank id is implied by the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankTableAttributeOutput {
    pub id: String,
    pub name: String,
    pub description: String,
    pub order: i64,
}

/// Entry row of a rank table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankTableEntryOutput {
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub scores: Scores,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankTableOutput {
    pub id: String,
    pub name: String,
    pub public: bool,
    pub attributes: Vec<RankTableAttributeOutput>,
    pub entries: Vec<RankTableEntryOutput>,
}

impl From<RankTable> for RankTableOutput {
    fn from(table: RankTable) -> Self {
        Self {
            id: table.id,
            name: table.name,
            public: table.public,
            attributes: table
                .attributes
                .into_iter()
                .map(|a| RankTableAttributeOutput {
                    id: a.id,
                    name: a.name,
                    description: a.description,
                    order: a.order,
                })
                .collect(),
            entries: table
                .entries
                .into_iter()
                .map(|e| RankTableEntryOutput {
                    id: e.id,
                    name: e.name,
                    image_url: e.image_url,
                    scores: e.scores,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadOutput {
    pub url: String,
}

/// Success marker for deletes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteOutput;
