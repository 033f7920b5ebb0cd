use async_trait::async_trait;

use crate::ranking::{Attribute, Entry, Rank, RankTable};

use super::Result;

// Lookups return `Ok(None)` when the record is absent. Creates and updates are
// both full overwrites, and deleting an absent record succeeds.

/// Repository for rank operations.
#[async_trait]
pub trait RankRepository: Send + Sync {
    /// Gets a rank by its ID.
    async fn get_rank(&self, id: &str) -> Result<Option<Rank>>;

    /// Writes a new rank.
    async fn create_rank(&self, rank: &Rank) -> Result<()>;

    /// Replaces an existing rank.
    async fn update_rank(&self, rank: &Rank) -> Result<()>;

    /// Deletes a rank. Its attributes and entries are left in place.
    async fn delete_rank(&self, rank: &Rank) -> Result<()>;
}

/// Repository for attribute operations, scoped by rank.
#[async_trait]
pub trait AttributeRepository: Send + Sync {
    /// Gets an attribute by its rank and ID.
    async fn get_attribute(&self, rank_id: &str, id: &str) -> Result<Option<Attribute>>;

    /// Writes a new attribute.
    async fn create_attribute(&self, attribute: &Attribute) -> Result<()>;

    /// Replaces an existing attribute.
    async fn update_attribute(&self, attribute: &Attribute) -> Result<()>;

    /// Deletes an attribute.
    async fn delete_attribute(&self, attribute: &Attribute) -> Result<()>;
}

/// Repository for entry operations, scoped by rank.
#[async_trait]
pub trait EntryRepository: Send + Sync {
    /// Gets an entry by its rank and ID.
    async fn get_entry(&self, rank_id: &str, id: &str) -> Result<Option<Entry>>;

    /// Writes a new entry.
    async fn create_entry(&self, entry: &Entry) -> Result<()>;

    /// Replaces an existing entry.
    async fn update_entry(&self, entry: &Entry) -> Result<()>;

    /// Deletes an entry.
    async fn delete_entry(&self, entry: &Entry) -> Result<()>;
}

/// Composite reader over everything indexed under one rank.
#[async_trait]
pub trait RankTableRepository: Send + Sync {
    /// Reads the rank with its sorted attributes and entries.
    async fn get_rank_table(&self, rank_id: &str) -> Result<Option<RankTable>>;
}
