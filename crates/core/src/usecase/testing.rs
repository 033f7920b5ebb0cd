//! Test doubles for the use case tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::files::{FileStorage, FileStorageError};
use crate::ranking::{Attribute, Entry, Rank, RankTable};
use crate::storage::{
    assemble_rank_table, primary_key, AttributeRepository, EntryRepository, RankRepository,
    RankTableRepository, RecordKind, RepositoryError, Result, StoredRecord,
};

/// Map-backed fake of every repository trait.
///
/// Keys records the way the real backends do, through `primary_key` and
/// `RecordKind`. `fail` makes every call return `ConnectionFailed`; `writes`
/// counts the mutating calls that reached the store. The in-memory backend
/// lives in the server crate, which depends on this one, so it cannot be
/// reused here.
#[derive(Default)]
pub struct FakeStore {
    records: Mutex<HashMap<(String, RecordKind), StoredRecord>>,
    pub fail: AtomicBool,
    pub writes: AtomicUsize,
}

impl FakeStore {
    pub fn failing() -> Self {
        let store = Self::default();
        store.fail.store(true, Ordering::SeqCst);
        store
    }

    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn check(&self) -> Result<()> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(RepositoryError::ConnectionFailed("store offline".to_string()));
        }
        Ok(())
    }

    fn put(&self, record: StoredRecord) -> Result<()> {
        self.check()?;
        self.writes.fetch_add(1, Ordering::SeqCst);
        let key = (record.primary_key().to_string(), record.kind());
        self.records.lock().unwrap().insert(key, record);
        Ok(())
    }

    fn remove(&self, record: StoredRecord) -> Result<()> {
        self.check()?;
        self.writes.fetch_add(1, Ordering::SeqCst);
        let key = (record.primary_key().to_string(), record.kind());
        self.records.lock().unwrap().remove(&key);
        Ok(())
    }

    fn get(&self, kind: RecordKind, rank_id: &str, id: &str) -> Result<Option<StoredRecord>> {
        self.check()?;
        let key = (primary_key(kind, rank_id, id), kind);
        Ok(self.records.lock().unwrap().get(&key).cloned())
    }
}

#[async_trait]
impl RankRepository for FakeStore {
    async fn get_rank(&self, id: &str) -> Result<Option<Rank>> {
        Ok(match self.get(RecordKind::Rank, id, id)? {
            Some(StoredRecord::Rank(r)) => Some(r.into()),
            _ => None,
        })
    }

    async fn create_rank(&self, rank: &Rank) -> Result<()> {
        self.put(rank.into())
    }

    async fn update_rank(&self, rank: &Rank) -> Result<()> {
        self.put(rank.into())
    }

    async fn delete_rank(&self, rank: &Rank) -> Result<()> {
        self.remove(rank.into())
    }
}

#[async_trait]
impl AttributeRepository for FakeStore {
    async fn get_attribute(&self, rank_id: &str, id: &str) -> Result<Option<Attribute>> {
        match self.get(RecordKind::Attribute, rank_id, id)? {
            Some(StoredRecord::Attribute(r)) => Ok(Some(r.try_into()?)),
            _ => Ok(None),
        }
    }

    async fn create_attribute(&self, attribute: &Attribute) -> Result<()> {
        self.put(attribute.into())
    }

    async fn update_attribute(&self, attribute: &Attribute) -> Result<()> {
        self.put(attribute.into())
    }

    async fn delete_attribute(&self, attribute: &Attribute) -> Result<()> {
        self.remove(attribute.into())
    }
}

#[async_trait]
impl EntryRepository for FakeStore {
    async fn get_entry(&self, rank_id: &str, id: &str) -> Result<Option<Entry>> {
        match self.get(RecordKind::Entry, rank_id, id)? {
            Some(StoredRecord::Entry(r)) => Ok(Some(r.try_into()?)),
            _ => Ok(None),
        }
    }

    async fn create_entry(&self, entry: &Entry) -> Result<()> {
        self.put(entry.into())
    }

    async fn update_entry(&self, entry: &Entry) -> Result<()> {
        self.put(entry.into())
    }

    async fn delete_entry(&self, entry: &Entry) -> Result<()> {
        self.remove(entry.into())
    }
}

#[async_trait]
impl RankTableRepository for FakeStore {
    async fn get_rank_table(&self, rank_id: &str) -> Result<Option<RankTable>> {
        self.check()?;
        let records: Vec<StoredRecord> = self
            .records
            .lock()
            .unwrap()
            .values()
            .filter(|r| r.rank_id() == rank_id)
            .cloned()
            .collect();
        assemble_rank_table(rank_id, records)
    }
}

/// File storage fake that records uploaded paths.
#[derive(Default)]
pub struct FakeFiles {
    pub uploads: Mutex<Vec<(String, Vec<u8>)>>,
    pub fail: bool,
}

#[async_trait]
impl FileStorage for FakeFiles {
    async fn upload(
        &self,
        path: &str,
        content: Vec<u8>,
    ) -> std::result::Result<String, FileStorageError> {
        if self.fail {
            return Err(FileStorageError::UploadFailed("bucket missing".to_string()));
        }
        self.uploads
            .lock()
            .unwrap()
            .push((path.to_string(), content));
        Ok(format!("https://files.test/{path}"))
    }
}
