//! Single-table key codec.
//!
//! Pure functions for building and parsing the keys that address every record
//! in the ranking table. Ranks are keyed by their own id, attributes and
//! entries by `<rank_id>/<id>`. Every record also carries a kind tag, which is
//! the table's range key and the secondary index's range key.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{RepositoryError, Result};

/// Separator between the rank id and the child id in a scoped key.
pub const SCOPE_SEPARATOR: char = '/';

// ============================================================================
// Record kind
// ============================================================================

/// Discriminator stored with every record.
///
/// Variant order matches the lexicographic order of the stored tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Attribute,
    Entry,
    Rank,
}

impl RecordKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RecordKind::Attribute => "attribute",
            RecordKind::Entry => "entry",
            RecordKind::Rank => "rank",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordKind {
    type Err = RepositoryError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "attribute" => Ok(RecordKind::Attribute),
            "entry" => Ok(RecordKind::Entry),
            "rank" => Ok(RecordKind::Rank),
            other => Err(RepositoryError::InvalidData(format!(
                "unknown record kind: {other}"
            ))),
        }
    }
}

// ============================================================================
// Keys
// ============================================================================

/// Builds the primary key of a record.
///
/// Pattern: `<id>` for ranks, `<rank_id>/<id>` for attributes and entries.
pub fn primary_key(kind: RecordKind, rank_id: &str, id: &str) -> String {
    match kind {
        RecordKind::Rank => id.to_string(),
        RecordKind::Attribute | RecordKind::Entry => scoped_key(rank_id, id),
    }
}

/// Builds a `<rank_id>/<id>` composite key.
pub fn scoped_key(rank_id: &str, id: &str) -> String {
    format!("{rank_id}{SCOPE_SEPARATOR}{id}")
}

/// Splits a composite key on its first separator into `(rank_id, id)`.
pub fn parse_scoped_id(composite: &str) -> Result<(&str, &str)> {
    composite.split_once(SCOPE_SEPARATOR).ok_or_else(|| {
        RepositoryError::MalformedKey(format!("no '{SCOPE_SEPARATOR}' in key '{composite}'"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_primary_key_is_bare_id() {
        assert_eq!(primary_key(RecordKind::Rank, "ignored", "R1"), "R1");
    }

    #[test]
    fn test_child_primary_keys_are_scoped() {
        assert_eq!(primary_key(RecordKind::Attribute, "R1", "A1"), "R1/A1");
        assert_eq!(primary_key(RecordKind::Entry, "R1", "E1"), "R1/E1");
    }

    #[test]
    fn test_parse_scoped_id() {
        assert_eq!(parse_scoped_id("R1/A1").unwrap(), ("R1", "A1"));
    }

    #[test]
    fn test_parse_scoped_id_splits_on_first_separator() {
        assert_eq!(parse_scoped_id("R1/A1/x").unwrap(), ("R1", "A1/x"));
    }

    #[test]
    fn test_parse_scoped_id_without_separator_is_malformed() {
        let result = parse_scoped_id("R1");
        assert!(matches!(result, Err(RepositoryError::MalformedKey(_))));
    }

    #[test]
    fn test_record_kind_round_trips_through_str() {
        for kind in [RecordKind::Rank, RecordKind::Attribute, RecordKind::Entry] {
            assert_eq!(kind.as_str().parse::<RecordKind>().unwrap(), kind);
        }
        assert!("category".parse::<RecordKind>().is_err());
    }

    #[test]
    fn test_record_kind_order_matches_tag_order() {
        let mut kinds = vec![RecordKind::Rank, RecordKind::Entry, RecordKind::Attribute];
        kinds.sort();
        let tags: Vec<_> = kinds.iter().map(|k| k.as_str()).collect();
        let mut sorted_tags = tags.clone();
        sorted_tags.sort();
        assert_eq!(tags, sorted_tags);
    }
}
