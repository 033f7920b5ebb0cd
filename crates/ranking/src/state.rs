//! Shared application state.
//!
//! Handlers receive the use case services, which in turn hold repository
//! trait objects. The concrete backend is chosen once at startup.

use std::sync::Arc;

use ranking_core::usecase::{
    AttributeUsecases, EntryUsecases, RankTableUsecases, RankUsecases, UploadUsecases,
};

use crate::aws::load_sdk_config;
use crate::config::Config;
use crate::files::{InMemoryFileStorage, S3FileStorage};
use crate::storage::{DynamoDbRepository, InMemoryRepository};

/// Shared application state, cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub ranks: RankUsecases,
    pub attributes: AttributeUsecases,
    pub entries: EntryUsecases,
    pub rank_tables: RankTableUsecases,
    pub uploads: UploadUsecases,
}

impl Default for AppState {
    fn default() -> Self {
        Self::in_memory(InMemoryRepository::new())
    }
}

impl AppState {
    /// Builds the state over an in-memory repository and file storage.
    pub fn in_memory(repo: InMemoryRepository) -> Self {
        let repo = Arc::new(repo);
        Self {
            ranks: RankUsecases::new(repo.clone()),
            attributes: AttributeUsecases::new(repo.clone()),
            entries: EntryUsecases::new(repo.clone()),
            rank_tables: RankTableUsecases::new(repo),
            uploads: UploadUsecases::new(Arc::new(InMemoryFileStorage::new())),
        }
    }

    /// In-memory state seeded with the demo rank.
    pub fn with_demo_data() -> Self {
        Self::in_memory(InMemoryRepository::with_demo_data())
    }

    /// Builds the state over DynamoDB and S3.
    pub async fn aws(config: &Config) -> Self {
        let sdk_config = load_sdk_config(config).await;

        let client = aws_sdk_dynamodb::Client::new(&sdk_config);
        let repo = Arc::new(DynamoDbRepository::new(
            client,
            &config.table_name,
            &config.index_name,
        ));
        let files = S3FileStorage::new(&sdk_config, config);

        tracing::info!(
            table = %repo.table_name(),
            bucket = %files.bucket(),
            "Using DynamoDB and S3 storage"
        );

        Self {
            ranks: RankUsecases::new(repo.clone()),
            attributes: AttributeUsecases::new(repo.clone()),
            entries: EntryUsecases::new(repo.clone()),
            rank_tables: RankTableUsecases::new(repo),
            uploads: UploadUsecases::new(Arc::new(files)),
        }
    }
}
