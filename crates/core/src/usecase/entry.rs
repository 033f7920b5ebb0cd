use std::sync::Arc;

use tracing::info;

use crate::ranking::{validate_entry, Entry, Validator};
use crate::storage::EntryRepository;

use super::{DeleteOutput, EntryOutput, Result, UsecaseError};

/// Create, find, update and delete operations for entries.
#[derive(Clone)]
pub struct EntryUsecases {
    repo: Arc<dyn EntryRepository>,
}

impl EntryUsecases {
    pub fn new(repo: Arc<dyn EntryRepository>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, entry: Entry) -> Result<EntryOutput> {
        validate(&entry)?;
        self.repo.create_entry(&entry).await?;
        info!(rank_id = %entry.rank_id, id = %entry.id, "entry created");
        Ok(entry.into())
    }

    pub async fn find(&self, rank_id: &str, id: &str) -> Result<EntryOutput> {
        self.find_entry(rank_id, id).await.map(Into::into)
    }

    pub async fn update(&self, entry: Entry) -> Result<EntryOutput> {
        validate(&entry)?;
        self.find_entry(&entry.rank_id, &entry.id).await?;
        self.repo.update_entry(&entry).await?;
        info!(rank_id = %entry.rank_id, id = %entry.id, "entry updated");
        Ok(entry.into())
    }

    pub async fn delete(&self, rank_id: &str, id: &str) -> Result<DeleteOutput> {
        let entry = self.find_entry(rank_id, id).await?;
        self.repo.delete_entry(&entry).await?;
        info!(rank_id = %rank_id, id = %id, "entry deleted");
        Ok(DeleteOutput)
    }

    async fn find_entry(&self, rank_id: &str, id: &str) -> Result<Entry> {
        self.repo
            .get_entry(rank_id, id)
            .await?
            .ok_or_else(|| UsecaseError::not_found("entry", id))
    }
}

fn validate(entry: &Entry) -> Result<()> {
    let mut v = Validator::new();
    validate_entry(&mut v, entry);
    v.finish().map_err(UsecaseError::Validation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::Scores;
    use crate::storage::RepositoryError;
    use crate::usecase::testing::FakeStore;

    const RANK_ID: &str = "1ac85e34-cb6f-40c9-97bb-16267877bb13";

    fn snes() -> Entry {
        let scores = Scores::from([("Controls".to_string(), 84)]);
        Entry::new("SNES", "https://videogame.com/snes.png", scores, RANK_ID)
    }

    fn usecases() -> (Arc<FakeStore>, EntryUsecases) {
        let store = Arc::new(FakeStore::default());
        (store.clone(), EntryUsecases::new(store))
    }

    #[tokio::test]
    async fn test_create_then_find() {
        let (_, uc) = usecases();
        let entry = snes();

        let created = uc.create(entry.clone()).await.unwrap();
        let found = uc.find(RANK_ID, &entry.id).await.unwrap();

        assert_eq!(created, found);
        assert_eq!(found.scores.get("Controls"), Some(&84));
    }

    #[tokio::test]
    async fn test_create_rejects_relative_image_url() {
        let (store, uc) = usecases();
        let mut entry = snes();
        entry.image_url = "/snes.png".to_string();

        let Err(UsecaseError::Validation(errors)) = uc.create(entry).await else {
            panic!("expected validation error");
        };
        assert_eq!(errors.get("image_url"), Some("must be a valid URL"));
        assert_eq!(store.write_count(), 0);
    }

    #[tokio::test]
    async fn test_update_replaces_scores() {
        let (_, uc) = usecases();
        let entry = snes();
        uc.create(entry.clone()).await.unwrap();

        let mut replacement = entry.clone();
        replacement.scores = Scores::from([("Sound".to_string(), 87)]);
        uc.update(replacement).await.unwrap();

        let found = uc.find(RANK_ID, &entry.id).await.unwrap();
        assert_eq!(found.scores.len(), 1);
        assert_eq!(found.scores.get("Sound"), Some(&87));
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let (store, uc) = usecases();

        let err = uc.delete(RANK_ID, "E1").await.unwrap_err();

        assert_eq!(err, UsecaseError::not_found("entry", "E1"));
        assert_eq!(store.write_count(), 0);
    }

    #[tokio::test]
    async fn test_delete_existing() {
        let (store, uc) = usecases();
        let entry = snes();
        uc.create(entry.clone()).await.unwrap();

        uc.delete(RANK_ID, &entry.id).await.unwrap();

        assert_eq!(store.write_count(), 2);
        assert!(uc.find(RANK_ID, &entry.id).await.is_err());
    }

    #[tokio::test]
    async fn test_store_errors_propagate_on_create() {
        let uc = EntryUsecases::new(Arc::new(FakeStore::failing()));

        let err = uc.create(snes()).await.unwrap_err();
        assert!(matches!(
            err,
            UsecaseError::Repository(RepositoryError::ConnectionFailed(_))
        ));
    }
}
