use std::sync::Arc;

use tracing::info;

use crate::ranking::{validate_rank, Rank, Validator};
use crate::storage::RankRepository;

use super::{DeleteOutput, RankOutput, Result, UsecaseError};

/// Create, find, update and delete operations for ranks.
#[derive(Clone)]
pub struct RankUsecases {
    repo: Arc<dyn RankRepository>,
}

impl RankUsecases {
    pub fn new(repo: Arc<dyn RankRepository>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, rank: Rank) -> Result<RankOutput> {
        validate(&rank)?;
        self.repo.create_rank(&rank).await?;
        info!(rank_id = %rank.id, "rank created");
        Ok(rank.into())
    }

    pub async fn find(&self, id: &str) -> Result<RankOutput> {
        self.find_rank(id).await.map(Into::into)
    }

    /// Replaces an existing rank. The rank must already exist.
    pub async fn update(&self, rank: Rank) -> Result<RankOutput> {
        validate(&rank)?;
        self.find_rank(&rank.id).await?;
        self.repo.update_rank(&rank).await?;
        info!(rank_id = %rank.id, "rank updated");
        Ok(rank.into())
    }

    /// Deletes a rank. Its attributes and entries are kept.
    pub async fn delete(&self, id: &str) -> Result<DeleteOutput> {
        let rank = self.find_rank(id).await?;
        self.repo.delete_rank(&rank).await?;
        info!(rank_id = %id, "rank deleted");
        Ok(DeleteOutput)
    }

    async fn find_rank(&self, id: &str) -> Result<Rank> {
        self.repo
            .get_rank(id)
            .await?
            .ok_or_else(|| UsecaseError::not_found("rank", id))
    }
}

fn validate(rank: &Rank) -> Result<()> {
    let mut v = Validator::new();
    validate_rank(&mut v, rank);
    v.finish().map_err(UsecaseError::Validation)
}
