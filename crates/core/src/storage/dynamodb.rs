//! DynamoDB item conversions for the ranking table.
//!
//! Pure functions translating [`StoredRecord`] values to and from
//! `AttributeValue` maps. Shared by the server repository and the seed task,
//! and testable without DynamoDB access.
//!
//! Item layout: `id` (hash key), `typ` (range key), `rankid` (index hash key),
//! `name`, plus `public` for ranks, `desc` and `order` for attributes,
//! `imageurl` and `scores` for entries.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;

use crate::ranking::Scores;

use super::keys::RecordKind;
use super::record::{AttributeRecord, EntryRecord, RankRecord, StoredRecord};
use super::{RepositoryError, Result};

// ============================================================================
// Attribute names
// ============================================================================

pub const ATTR_ID: &str = "id";
pub const ATTR_KIND: &str = "typ";
pub const ATTR_RANK_ID: &str = "rankid";
pub const ATTR_NAME: &str = "name";
pub const ATTR_PUBLIC: &str = "public";
pub const ATTR_DESCRIPTION: &str = "desc";
pub const ATTR_ORDER: &str = "order";
pub const ATTR_IMAGE_URL: &str = "imageurl";
pub const ATTR_SCORES: &str = "scores";

/// Item type used by the SDK.
pub type Item = HashMap<String, AttributeValue>;

// ============================================================================
// Keys
// ============================================================================

/// Builds the `{id, typ}` key of a record.
pub fn key(primary_key: &str, kind: RecordKind) -> Item {
    HashMap::from([
        (
            ATTR_ID.to_string(),
            AttributeValue::S(primary_key.to_string()),
        ),
        (
            ATTR_KIND.to_string(),
            AttributeValue::S(kind.as_str().to_string()),
        ),
    ])
}

// ============================================================================
// Record -> item
// ============================================================================

/// Convert a stored record to a DynamoDB item.
pub fn record_to_item(record: &StoredRecord) -> Item {
    let mut item = key(record.primary_key(), record.kind());
    item.insert(
        ATTR_RANK_ID.to_string(),
        AttributeValue::S(record.rank_id().to_string()),
    );

    match record {
        StoredRecord::Rank(r) => {
            item.insert(ATTR_NAME.to_string(), AttributeValue::S(r.name.clone()));
            item.insert(ATTR_PUBLIC.to_string(), AttributeValue::Bool(r.public));
        }
        StoredRecord::Attribute(r) => {
            item.insert(ATTR_NAME.to_string(), AttributeValue::S(r.name.clone()));
            item.insert(
                ATTR_DESCRIPTION.to_string(),
                AttributeValue::S(r.description.clone()),
            );
            item.insert(
                ATTR_ORDER.to_string(),
                AttributeValue::N(r.order.to_string()),
            );
        }
        StoredRecord::Entry(r) => {
            item.insert(ATTR_NAME.to_string(), AttributeValue::S(r.name.clone()));
            item.insert(
                ATTR_IMAGE_URL.to_string(),
                AttributeValue::S(r.image_url.clone()),
            );
            item.insert(ATTR_SCORES.to_string(), scores_to_attribute(&r.scores));
        }
    }

    item
}

fn scores_to_attribute(scores: &Scores) -> AttributeValue {
    AttributeValue::M(
        scores
            .iter()
            .map(|(name, score)| (name.clone(), AttributeValue::N(score.to_string())))
            .collect(),
    )
}

// ============================================================================
// Item -> record
// ============================================================================

/// Convert a DynamoDB item to a stored record, dispatching on `typ`.
pub fn item_to_record(item: &Item) -> Result<StoredRecord> {
    let kind: RecordKind = get_string(item, ATTR_KIND)?.parse()?;
    let id = get_string(item, ATTR_ID)?;
    let rank_id = get_string(item, ATTR_RANK_ID)?;
    let name = get_string(item, ATTR_NAME)?;

    let record = match kind {
        RecordKind::Rank => StoredRecord::Rank(RankRecord {
            id,
            rank_id,
            name,
            public: get_bool(item, ATTR_PUBLIC)?,
        }),
        RecordKind::Attribute => StoredRecord::Attribute(AttributeRecord {
            id,
            rank_id,
            name,
            description: get_optional_string(item, ATTR_DESCRIPTION)?.unwrap_or_default(),
            order: get_number(item, ATTR_ORDER)?,
        }),
        RecordKind::Entry => StoredRecord::Entry(EntryRecord {
            id,
            rank_id,
            name,
            image_url: get_optional_string(item, ATTR_IMAGE_URL)?.unwrap_or_default(),
            scores: get_scores(item, ATTR_SCORES)?,
        }),
    };

    Ok(record)
}

// ============================================================================
// Helper functions
// ============================================================================

/// Get a required string attribute.
fn get_string(item: &Item, key: &str) -> Result<String> {
    get_optional_string(item, key)?
        .ok_or_else(|| RepositoryError::Serialization(format!("missing attribute: {key}")))
}

/// Get an optional string attribute. `NULL` reads as absent.
fn get_optional_string(item: &Item, key: &str) -> Result<Option<String>> {
    match item.get(key) {
        None | Some(AttributeValue::Null(_)) => Ok(None),
        Some(AttributeValue::S(s)) => Ok(Some(s.clone())),
        Some(_) => Err(RepositoryError::Serialization(format!(
            "attribute {key} is not a string"
        ))),
    }
}

/// Get a boolean attribute. Absent reads as `false`.
fn get_bool(item: &Item, key: &str) -> Result<bool> {
    match item.get(key) {
        None | Some(AttributeValue::Null(_)) => Ok(false),
        Some(AttributeValue::Bool(b)) => Ok(*b),
        Some(_) => Err(RepositoryError::Serialization(format!(
            "attribute {key} is not a boolean"
        ))),
    }
}

/// Get a numeric attribute. Absent reads as `0`.
fn get_number(item: &Item, key: &str) -> Result<i64> {
    match item.get(key) {
        None | Some(AttributeValue::Null(_)) => Ok(0),
        Some(AttributeValue::N(n)) => parse_number(key, n),
        Some(_) => Err(RepositoryError::Serialization(format!(
            "attribute {key} is not a number"
        ))),
    }
}

/// Get a map of numbers. Absent reads as empty.
fn get_scores(item: &Item, key: &str) -> Result<Scores> {
    match item.get(key) {
        None | Some(AttributeValue::Null(_)) => Ok(Scores::new()),
        Some(AttributeValue::M(map)) => map
            .iter()
            .map(|(name, value)| match value {
                AttributeValue::N(n) => Ok((name.clone(), parse_number(key, n)?)),
                _ => Err(RepositoryError::Serialization(format!(
                    "score {name} is not a number"
                ))),
            })
            .collect(),
        Some(_) => Err(RepositoryError::Serialization(format!(
            "attribute {key} is not a map"
        ))),
    }
}

fn parse_number(key: &str, n: &str) -> Result<i64> {
    n.parse()
        .map_err(|e| RepositoryError::Serialization(format!("invalid number in {key}: {e}")))
}
