use std::sync::Arc;

use crate::storage::RankTableRepository;

use super::{RankTableOutput, Result, UsecaseError};

/// Read operation for the composed rank table view.
#[derive(Clone)]
pub struct RankTableUsecases {
    repo: Arc<dyn RankTableRepository>,
}

impl RankTableUsecases {
    pub fn new(repo: Arc<dyn RankTableRepository>) -> Self {
        Self { repo }
    }

    pub async fn find(&self, id: &str) -> Result<RankTableOutput> {
        self.repo
            .get_rank_table(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| UsecaseError::not_found("rank", id))
    }
}
