//! In-memory repository implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use ranking_core::ranking::{
    demo_attributes, demo_entries, demo_rank, Attribute, Entry, Rank, RankTable,
};
use ranking_core::storage::{
    assemble_rank_table, primary_key, AttributeRepository, EntryRepository, RankRepository,
    RankTableRepository, RecordKind, Result, StoredRecord,
};

type RecordKey = (String, RecordKind);

/// In-memory storage backend.
///
/// Keeps the same `(id, typ)` keyed records the DynamoDB table holds, so
/// both backends agree on scoping and overwrite semantics.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    records: Arc<RwLock<BTreeMap<RecordKey, StoredRecord>>>,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::from_records(Vec::new())
    }

    /// Creates a repository pre-populated with `records`.
    pub fn from_records(records: impl IntoIterator<Item = StoredRecord>) -> Self {
        let map = records
            .into_iter()
            .map(|record| ((record.primary_key().to_string(), record.kind()), record))
            .collect();
        Self {
            records: Arc::new(RwLock::new(map)),
        }
    }

    /// Creates a repository holding the demo rank with its attributes and entries.
    pub fn with_demo_data() -> Self {
        let rank = demo_rank();
        let attributes = demo_attributes();
        let entries = demo_entries();

        let records = std::iter::once(StoredRecord::from(&rank))
            .chain(attributes.iter().map(StoredRecord::from))
            .chain(entries.iter().map(StoredRecord::from))
            .collect::<Vec<_>>();
        Self::from_records(records)
    }

    async fn get(&self, primary_key: String, kind: RecordKind) -> Option<StoredRecord> {
        self.records.read().await.get(&(primary_key, kind)).cloned()
    }

    async fn put(&self, record: StoredRecord) {
        let key = (record.primary_key().to_string(), record.kind());
        self.records.write().await.insert(key, record);
    }

    async fn remove(&self, primary_key: String, kind: RecordKind) {
        self.records.write().await.remove(&(primary_key, kind));
    }
}

#[async_trait]
impl RankRepository for InMemoryRepository {
    async fn get_rank(&self, id: &str) -> Result<Option<Rank>> {
        let pk = primary_key(RecordKind::Rank, id, id);
        match self.get(pk, RecordKind::Rank).await {
            Some(StoredRecord::Rank(record)) => Ok(Some(record.into())),
            _ => Ok(None),
        }
    }

    async fn create_rank(&self, rank: &Rank) -> Result<()> {
        self.put(rank.into()).await;
        Ok(())
    }

    async fn update_rank(&self, rank: &Rank) -> Result<()> {
        self.put(rank.into()).await;
        Ok(())
    }

    async fn delete_rank(&self, rank: &Rank) -> Result<()> {
        let pk = primary_key(RecordKind::Rank, &rank.id, &rank.id);
        self.remove(pk, RecordKind::Rank).await;
        Ok(())
    }
}

#[async_trait]
impl AttributeRepository for InMemoryRepository {
    async fn get_attribute(&self, rank_id: &str, id: &str) -> Result<Option<Attribute>> {
        let pk = primary_key(RecordKind::Attribute, rank_id, id);
        match self.get(pk, RecordKind::Attribute).await {
            Some(StoredRecord::Attribute(record)) => Ok(Some(record.try_into()?)),
            _ => Ok(None),
        }
    }

    async fn create_attribute(&self, attribute: &Attribute) -> Result<()> {
        self.put(attribute.into()).await;
        Ok(())
    }

    async fn update_attribute(&self, attribute: &Attribute) -> Result<()> {
        self.put(attribute.into()).await;
        Ok(())
    }

    async fn delete_attribute(&self, attribute: &Attribute) -> Result<()> {
        let pk = primary_key(RecordKind::Attribute, &attribute.rank_id, &attribute.id);
        self.remove(pk, RecordKind::Attribute).await;
        Ok(())
    }
}

#[async_trait]
impl EntryRepository for InMemoryRepository {
    async fn get_entry(&self, rank_id: &str, id: &str) -> Result<Option<Entry>> {
        let pk = primary_key(RecordKind::Entry, rank_id, id);
        match self.get(pk, RecordKind::Entry).await {
            Some(StoredRecord::Entry(record)) => Ok(Some(record.try_into()?)),
            _ => Ok(None),
        }
    }

    async fn create_entry(&self, entry: &Entry) -> Result<()> {
        self.put(entry.into()).await;
        Ok(())
    }

    async fn update_entry(&self, entry: &Entry) -> Result<()> {
        self.put(entry.into()).await;
        Ok(())
    }

    async fn delete_entry(&self, entry: &Entry) -> Result<()> {
        let pk = primary_key(RecordKind::Entry, &entry.rank_id, &entry.id);
        self.remove(pk, RecordKind::Entry).await;
        Ok(())
    }
}

#[async_trait]
impl RankTableRepository for InMemoryRepository {
    async fn get_rank_table(&self, rank_id: &str) -> Result<Option<RankTable>> {
        let records: Vec<StoredRecord> = self
            .records
            .read()
            .await
            .values()
            .filter(|record| record.rank_id() == rank_id)
            .cloned()
            .collect();
        assemble_rank_table(rank_id, records)
    }
}
