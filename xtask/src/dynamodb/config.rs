//! Table schema of the ranking table (pure data).
//!
//! Ranks, attributes and entries share one table keyed by `id` + `typ`. The
//! `gsi` index groups every record of a rank under its `rankid`.

use ranking_core::storage::dynamodb::{ATTR_ID, ATTR_RANK_ID, ATTR_KIND};

/// Default table name, matching the server's `DYNAMODB_TABLE_NAME` default.
pub const DEFAULT_TABLE_NAME: &str = "rank";

/// Name of the rank index, matching the server's `DYNAMODB_INDEX_NAME` default.
pub const RANK_INDEX_NAME: &str = "gsi";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    pub table_name: String,
    pub partition_key: KeyAttribute,
    pub sort_key: Option<KeyAttribute>,
    pub gsis: Vec<GsiConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyAttribute {
    pub name: String,
    pub attribute_type: AttributeType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeType {
    String,
}

impl KeyAttribute {
    fn string(name: &str) -> Self {
        Self {
            name: name.to_string(),
            attribute_type: AttributeType::String,
        }
    }
}

/// Global Secondary Index with an ALL projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GsiConfig {
    pub name: String,
    pub partition_key: KeyAttribute,
    pub sort_key: Option<KeyAttribute>,
}

impl TableConfig {
    pub fn with_table_name(mut self, name: &str) -> Self {
        self.table_name = name.to_string();
        self
    }

    /// Every attribute named by the table or index keys, without duplicates.
    pub fn key_attributes(&self) -> Vec<&KeyAttribute> {
        let mut attributes: Vec<&KeyAttribute> = Vec::new();
        let gsi_keys = self
            .gsis
            .iter()
            .flat_map(|gsi| std::iter::once(&gsi.partition_key).chain(gsi.sort_key.as_ref()));
        let keys = std::iter::once(&self.partition_key)
            .chain(self.sort_key.as_ref())
            .chain(gsi_keys);

        for key in keys {
            if !attributes.iter().any(|a| a.name == key.name) {
                attributes.push(key);
            }
        }
        attributes
    }
}

/// Returns the ranking table configuration.
pub fn rank_table_config() -> TableConfig {
    TableConfig {
        table_name: DEFAULT_TABLE_NAME.to_string(),
        partition_key: KeyAttribute::string(ATTR_ID),
        sort_key: Some(KeyAttribute::string(ATTR_KIND)),
        gsis: vec![GsiConfig {
            name: RANK_INDEX_NAME.to_string(),
            partition_key: KeyAttribute::string(ATTR_RANK_ID),
            sort_key: Some(KeyAttribute::string(ATTR_KIND)),
        }],
    }
}
