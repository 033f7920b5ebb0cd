use axum::{
    extract::{Path, State},
    Json,
};

use ranking_core::usecase::RankTableOutput;

use super::AppError;
use crate::state::AppState;

/// GET /rank/{id}/table - The rank with its sorted attributes and entries.
pub async fn get_rank_table(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RankTableOutput>, AppError> {
    let output = state.rank_tables.find(&id).await?;
    Ok(Json(output))
}
