//! Tagged storage records and rank table assembly.
//!
//! Every row of the ranking table is one [`StoredRecord`]. The variant is the
//! record kind, and the `id` field of each variant holds the row's primary
//! key, which is scoped (`<rank_id>/<id>`) for attributes and entries.
//! Backends translate records to and from their own item format and share
//! [`assemble_rank_table`] for the composite read.

use tracing::warn;

use crate::ranking::{Attribute, Entry, Rank, RankTable, Scores};

use super::keys::{parse_scoped_id, primary_key, RecordKind};
use super::Result;

/// Stored form of a rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankRecord {
    pub id: String,
    /// Same as `id`; written so the rank shows up in the rank index.
    pub rank_id: String,
    pub name: String,
    pub public: bool,
}

/// Stored form of an attribute. `id` is the scoped primary key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeRecord {
    pub id: String,
    pub rank_id: String,
    pub name: String,
    pub description: String,
    pub order: i64,
}

/// Stored form of an entry. `id` is the scoped primary key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryRecord {
    pub id: String,
    pub rank_id: String,
    pub name: String,
    pub image_url: String,
    pub scores: Scores,
}

/// One row of the ranking table, discriminated by record kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoredRecord {
    Rank(RankRecord),
    Attribute(AttributeRecord),
    Entry(EntryRecord),
}

impl StoredRecord {
    pub fn kind(&self) -> RecordKind {
        match self {
            StoredRecord::Rank(_) => RecordKind::Rank,
            StoredRecord::Attribute(_) => RecordKind::Attribute,
            StoredRecord::Entry(_) => RecordKind::Entry,
        }
    }

    /// The primary key this record is stored under.
    pub fn primary_key(&self) -> &str {
        match self {
            StoredRecord::Rank(r) => &r.id,
            StoredRecord::Attribute(r) => &r.id,
            StoredRecord::Entry(r) => &r.id,
        }
    }

    /// The rank this record belongs to (the rank itself for rank records).
    pub fn rank_id(&self) -> &str {
        match self {
            StoredRecord::Rank(r) => &r.rank_id,
            StoredRecord::Attribute(r) => &r.rank_id,
            StoredRecord::Entry(r) => &r.rank_id,
        }
    }
}

// ============================================================================
// Domain -> record
// ============================================================================

impl From<&Rank> for StoredRecord {
    fn from(rank: &Rank) -> Self {
        StoredRecord::Rank(RankRecord {
            id: primary_key(RecordKind::Rank, &rank.id, &rank.id),
            rank_id: rank.id.clone(),
            name: rank.name.clone(),
            public: rank.public,
        })
    }
}

impl From<&Attribute> for StoredRecord {
    fn from(attribute: &Attribute) -> Self {
        StoredRecord::Attribute(AttributeRecord {
            id: primary_key(RecordKind::Attribute, &attribute.rank_id, &attribute.id),
            rank_id: attribute.rank_id.clone(),
            name: attribute.name.clone(),
            description: attribute.description.clone(),
            order: attribute.order,
        })
    }
}

impl From<&Entry> for StoredRecord {
    fn from(entry: &Entry) -> Self {
        StoredRecord::Entry(EntryRecord {
            id: primary_key(RecordKind::Entry, &entry.rank_id, &entry.id),
            rank_id: entry.rank_id.clone(),
            name: entry.name.clone(),
            image_url: entry.image_url.clone(),
            scores: entry.scores.clone(),
        })
    }
}

// ============================================================================
// Record -> domain
// ============================================================================

impl From<RankRecord> for Rank {
    fn from(record: RankRecord) -> Self {
        Rank {
            id: record.id,
            name: record.name,
            public: record.public,
        }
    }
}

impl TryFrom<AttributeRecord> for Attribute {
    type Error = super::RepositoryError;

    fn try_from(record: AttributeRecord) -> Result<Self> {
        let (_, id) = parse_scoped_id(&record.id)?;
        Ok(Attribute {
            id: id.to_string(),
            name: record.name,
            description: record.description,
            order: record.order,
            rank_id: record.rank_id,
        })
    }
}

impl TryFrom<EntryRecord> for Entry {
    type Error = super::RepositoryError;

    fn try_from(record: EntryRecord) -> Result<Self> {
        let (_, id) = parse_scoped_id(&record.id)?;
        Ok(Entry {
            id: id.to_string(),
            name: record.name,
            image_url: record.image_url,
            scores: record.scores,
            rank_id: record.rank_id,
        })
    }
}

// ============================================================================
// Composite read
// ============================================================================

/// Builds the rank table from every record indexed under `rank_id`.
///
/// Returns `Ok(None)` when there are no records. Attributes are stably sorted
/// by `order` and entries by `name`. Children whose rank record is missing
/// (the rank was deleted, children are not) still produce a table, with the
/// queried id and an empty header.
pub fn assemble_rank_table(
    rank_id: &str,
    records: impl IntoIterator<Item = StoredRecord>,
) -> Result<Option<RankTable>> {
    let mut header: Option<Rank> = None;
    let mut attributes = Vec::new();
    let mut entries = Vec::new();
    let mut seen = false;

    for record in records {
        seen = true;
        match record {
            StoredRecord::Rank(r) => {
                if header.is_some() {
                    warn!(rank_id = %rank_id, "duplicate rank record in rank index");
                    continue;
                }
                header = Some(r.into());
            }
            StoredRecord::Attribute(r) => attributes.push(Attribute::try_from(r)?),
            StoredRecord::Entry(r) => entries.push(Entry::try_from(r)?),
        }
    }

    if !seen {
        return Ok(None);
    }

    attributes.sort_by_key(|a| a.order);
    entries.sort_by(|a, b| a.name.cmp(&b.name));

    let header = header.unwrap_or_else(|| {
        warn!(rank_id = %rank_id, "rank record missing, children are orphaned");
        Rank {
            id: rank_id.to_string(),
            name: String::new(),
            public: false,
        }
    });

    Ok(Some(RankTable {
        id: header.id,
        name: header.name,
        public: header.public,
        attributes,
        entries,
    }))
}
