use std::sync::Arc;

use tracing::info;

use crate::ranking::{validate_attribute, Attribute, Validator};
use crate::storage::AttributeRepository;

use super::{AttributeOutput, DeleteOutput, Result, UsecaseError};

/// Create, find, update and delete operations for attributes.
#[derive(Clone)]
pub struct AttributeUsecases {
    repo: Arc<dyn AttributeRepository>,
}

impl AttributeUsecases {
    pub fn new(repo: Arc<dyn AttributeRepository>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, attribute: Attribute) -> Result<AttributeOutput> {
        validate(&attribute)?;
        self.repo.create_attribute(&attribute).await?;
        info!(rank_id = %attribute.rank_id, id = %attribute.id, "attribute created");
        Ok(attribute.into())
    }

    pub async fn find(&self, rank_id: &str, id: &str) -> Result<AttributeOutput> {
        self.find_attribute(rank_id, id).await.map(Into::into)
    }

    pub async fn update(&self, attribute: Attribute) -> Result<AttributeOutput> {
        validate(&attribute)?;
        self.find_attribute(&attribute.rank_id, &attribute.id).await?;
        self.repo.update_attribute(&attribute).await?;
        info!(rank_id = %attribute.rank_id, id = %attribute.id, "attribute updated");
        Ok(attribute.into())
    }

    pub async fn delete(&self, rank_id: &str, id: &str) -> Result<DeleteOutput> {
        let attribute = self.find_attribute(rank_id, id).await?;
        self.repo.delete_attribute(&attribute).await?;
        info!(rank_id = %rank_id, id = %id, "attribute deleted");
        Ok(DeleteOutput)
    }

    async fn find_attribute(&self, rank_id: &str, id: &str) -> Result<Attribute> {
        self.repo
            .get_attribute(rank_id, id)
            .await?
            .ok_or_else(|| UsecaseError::not_found("attribute", id))
    }
}

fn validate(attribute: &Attribute) -> Result<()> {
    let mut v = Validator::new();
    validate_attribute(&mut v, attribute);
    v.finish().map_err(UsecaseError::Validation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecase::testing::FakeStore;

    const RANK_A: &str = "1ac85e34-cb6f-40c9-97bb-16267877bb13";
    const RANK_B: &str = "6b1b7c1e-3f0a-4f56-9d0b-3a0f4f6f7a11";

    fn usecases() -> (Arc<FakeStore>, AttributeUsecases) {
        let store = Arc::new(FakeStore::default());
        (store.clone(), AttributeUsecases::new(store))
    }

    #[tokio::test]
    async fn test_create_then_find() {
        let (_, uc) = usecases();
        let attribute = Attribute::new("Controls", "Quality of the controls", 1, RANK_A);

        uc.create(attribute.clone()).await.unwrap();
        let found = uc.find(RANK_A, &attribute.id).await.unwrap();

        assert_eq!(found, AttributeOutput::from(attribute));
    }

    #[tokio::test]
    async fn test_same_id_under_different_ranks_is_distinct() {
        let (_, uc) = usecases();
        let a = Attribute::new("Controls", "", 1, RANK_A);
        let b = Attribute::new("Graphics", "", 2, RANK_B).with_id(&a.id);

        uc.create(a.clone()).await.unwrap();
        uc.create(b.clone()).await.unwrap();

        assert_eq!(uc.find(RANK_A, &a.id).await.unwrap().name, "Controls");
        assert_eq!(uc.find(RANK_B, &a.id).await.unwrap().name, "Graphics");
    }

    #[tokio::test]
    async fn test_create_reports_every_invalid_field() {
        let (store, uc) = usecases();
        let attribute = Attribute::new("Co", "x".repeat(151), 0, "R1").with_id("A1");

        let Err(UsecaseError::Validation(errors)) = uc.create(attribute).await else {
            panic!("expected validation error");
        };

        assert_eq!(errors.len(), 5);
        assert_eq!(store.write_count(), 0);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let (store, uc) = usecases();
        let attribute = Attribute::new("Controls", "", 1, RANK_A);

        let err = uc.update(attribute.clone()).await.unwrap_err();

        assert_eq!(err, UsecaseError::not_found("attribute", attribute.id));
        assert_eq!(store.write_count(), 0);
    }

    #[tokio::test]
    async fn test_update_replaces_fields() {
        let (_, uc) = usecases();
        let attribute = Attribute::new("Controls", "Old", 1, RANK_A);
        uc.create(attribute.clone()).await.unwrap();

        let replacement = Attribute::new("Controls", "", 4, RANK_A).with_id(&attribute.id);
        uc.update(replacement).await.unwrap();

        let found = uc.find(RANK_A, &attribute.id).await.unwrap();
        assert_eq!(found.description, "");
        assert_eq!(found.order, 4);
    }

    #[tokio::test]
    async fn test_delete() {
        let (_, uc) = usecases();
        let attribute = Attribute::new("Controls", "", 1, RANK_A);
        uc.create(attribute.clone()).await.unwrap();

        uc.delete(RANK_A, &attribute.id).await.unwrap();

        let err = uc.find(RANK_A, &attribute.id).await.unwrap_err();
        assert_eq!(err.to_string(), format!("attribute not found: {}", attribute.id));
    }
}
