//! DynamoDB repository implementation.
//!
//! Implements the repository traits from `ranking_core::storage` over a single
//! table keyed by `id` + `typ`, with a secondary index keyed by `rankid` + `typ`.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use tracing::debug;

use ranking_core::ranking::{Attribute, Entry, Rank, RankTable};
use ranking_core::storage::dynamodb::{item_to_record, key, record_to_item, ATTR_RANK_ID};
use ranking_core::storage::{
    assemble_rank_table, primary_key, AttributeRepository, EntryRepository, RankRepository,
    RankTableRepository, RecordKind, Result, StoredRecord,
};

use super::error::{
    map_delete_item_error, map_get_item_error, map_put_item_error, map_query_error,
};

/// DynamoDB-based repository implementation.
///
/// One instance serves every record kind. Writes are unconditional puts, so
/// create and update share the same code path.
#[derive(Debug, Clone)]
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
    index_name: String,
}

impl DynamoDbRepository {
    /// Creates a new repository over the given table and rank index.
    pub fn new(client: Client, table_name: impl Into<String>, index_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
            index_name: index_name.into(),
        }
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    async fn get_record(&self, primary_key: &str, kind: RecordKind) -> Result<Option<StoredRecord>> {
        debug!(table = %self.table_name, id = %primary_key, kind = %kind, "GetItem");

        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .set_key(Some(key(primary_key, kind)))
            .send()
            .await
            .map_err(|e| map_get_item_error(e, primary_key))?;

        result.item.as_ref().map(item_to_record).transpose()
    }

    async fn put_record(&self, record: StoredRecord) -> Result<()> {
        debug!(
            table = %self.table_name,
            id = %record.primary_key(),
            kind = %record.kind(),
            "PutItem"
        );

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(record_to_item(&record)))
            .send()
            .await
            .map_err(|e| map_put_item_error(e, record.primary_key()))?;

        Ok(())
    }

    async fn delete_record(&self, primary_key: &str, kind: RecordKind) -> Result<()> {
        debug!(table = %self.table_name, id = %primary_key, kind = %kind, "DeleteItem");

        self.client
            .delete_item()
            .table_name(&self.table_name)
            .set_key(Some(key(primary_key, kind)))
            .send()
            .await
            .map_err(|e| map_delete_item_error(e, primary_key))?;

        Ok(())
    }

    /// Reads every record indexed under `rank_id`, following pagination.
    async fn query_rank(&self, rank_id: &str) -> Result<Vec<StoredRecord>> {
        let mut records = Vec::new();
        let mut start_key = None;

        loop {
            let output = self
                .client
                .query()
                .table_name(&self.table_name)
                .index_name(&self.index_name)
                .key_condition_expression("#rankid = :rankid")
                .expression_attribute_names("#rankid", ATTR_RANK_ID)
                .expression_attribute_values(":rankid", AttributeValue::S(rank_id.to_string()))
                .set_exclusive_start_key(start_key)
                .send()
                .await
                .map_err(map_query_error)?;

            for item in output.items.unwrap_or_default() {
                records.push(item_to_record(&item)?);
            }

            match output.last_evaluated_key {
                Some(last) if !last.is_empty() => start_key = Some(last),
                _ => break,
            }
        }

        debug!(rank_id = %rank_id, count = records.len(), "Queried rank index");
        Ok(records)
    }
}

// ============================================================================
// RankRepository implementation
// ============================================================================

#[async_trait]
impl RankRepository for DynamoDbRepository {
    async fn get_rank(&self, id: &str) -> Result<Option<Rank>> {
        let pk = primary_key(RecordKind::Rank, id, id);
        match self.get_record(&pk, RecordKind::Rank).await? {
            Some(StoredRecord::Rank(record)) => Ok(Some(record.into())),
            _ => Ok(None),
        }
    }

    async fn create_rank(&self, rank: &Rank) -> Result<()> {
        self.put_record(rank.into()).await
    }

    async fn update_rank(&self, rank: &Rank) -> Result<()> {
        self.put_record(rank.into()).await
    }

    async fn delete_rank(&self, rank: &Rank) -> Result<()> {
        let pk = primary_key(RecordKind::Rank, &rank.id, &rank.id);
        self.delete_record(&pk, RecordKind::Rank).await
    }
}

// ============================================================================
// AttributeRepository implementation
// ============================================================================

#[async_trait]
impl AttributeRepository for DynamoDbRepository {
    async fn get_attribute(&self, rank_id: &str, id: &str) -> Result<Option<Attribute>> {
        let pk = primary_key(RecordKind::Attribute, rank_id, id);
        match self.get_record(&pk, RecordKind::Attribute).await? {
            Some(StoredRecord::Attribute(record)) => Ok(Some(record.try_into()?)),
            _ => Ok(None),
        }
    }

    async fn create_attribute(&self, attribute: &Attribute) -> Result<()> {
        self.put_record(attribute.into()).await
    }

    async fn update_attribute(&self, attribute: &Attribute) -> Result<()> {
        self.put_record(attribute.into()).await
    }

    async fn delete_attribute(&self, attribute: &Attribute) -> Result<()> {
        let pk = primary_key(RecordKind::Attribute, &attribute.rank_id, &attribute.id);
        self.delete_record(&pk, RecordKind::Attribute).await
    }
}

// ============================================================================
// EntryRepository implementation
// ============================================================================

#[async_trait]
impl EntryRepository for DynamoDbRepository {
    async fn get_entry(&self, rank_id: &str, id: &str) -> Result<Option<Entry>> {
        let pk = primary_key(RecordKind::Entry, rank_id, id);
        match self.get_record(&pk, RecordKind::Entry).await? {
            Some(StoredRecord::Entry(record)) => Ok(Some(record.try_into()?)),
            _ => Ok(None),
        }
    }

    async fn create_entry(&self, entry: &Entry) -> Result<()> {
        self.put_record(entry.into()).await
    }

    async fn update_entry(&self, entry: &Entry) -> Result<()> {
        self.put_record(entry.into()).await
    }

    async fn delete_entry(&self, entry: &Entry) -> Result<()> {
        let pk = primary_key(RecordKind::Entry, &entry.rank_id, &entry.id);
        self.delete_record(&pk, RecordKind::Entry).await
    }
}

// ============================================================================
// RankTableRepository implementation
// ============================================================================

#[async_trait]
impl RankTableRepository for DynamoDbRepository {
    async fn get_rank_table(&self, rank_id: &str) -> Result<Option<RankTable>> {
        let records = self.query_rank(rank_id).await?;
        assemble_rank_table(rank_id, records)
    }
}
