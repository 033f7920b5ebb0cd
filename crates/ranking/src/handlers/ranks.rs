//! Rank CRUD handlers.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use ranking_core::ranking::RankRequest;

use super::{deleted, AppError};
use crate::state::AppState;

/// POST /rank
pub async fn create_rank(
    State(state): State<AppState>,
    body: Result<Json<RankRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(request) = body?;
    let output = state.ranks.create(request.into_rank()).await?;
    Ok((StatusCode::CREATED, Json(output)))
}

/// GET /rank/{id}
pub async fn get_rank(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let output = state.ranks.find(&id).await?;
    Ok(Json(output))
}

/// PUT /rank/{id}
///
/// Replaces every mutable field. Fields missing from the body take their
/// defaults rather than keeping the stored value.
pub async fn update_rank(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<RankRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(request) = body?;
    let output = state.ranks.update(request.into_rank_with_id(id)).await?;
    Ok(Json(output))
}

/// DELETE /rank/{id}
pub async fn delete_rank(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.ranks.delete(&id).await?;
    Ok(deleted("rank"))
}
