//! Attribute CRUD handlers, scoped under a rank.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use ranking_core::ranking::AttributeRequest;

use super::{deleted, AppError};
use crate::state::AppState;

/// POST /rank/{rank_id}/attribute
pub async fn create_attribute(
    State(state): State<AppState>,
    Path(rank_id): Path<String>,
    body: Result<Json<AttributeRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(request) = body?;
    let output = state
        .attributes
        .create(request.into_attribute(rank_id))
        .await?;
    Ok((StatusCode::CREATED, Json(output)))
}

/// GET /rank/{rank_id}/attribute/{id}
pub async fn get_attribute(
    State(state): State<AppState>,
    Path((rank_id, id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let output = state.attributes.find(&rank_id, &id).await?;
    Ok(Json(output))
}

/// PUT /rank/{rank_id}/attribute/{id}
pub async fn update_attribute(
    State(state): State<AppState>,
    Path((rank_id, id)): Path<(String, String)>,
    body: Result<Json<AttributeRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(request) = body?;
    let output = state
        .attributes
        .update(request.into_attribute_with_id(rank_id, id))
        .await?;
    Ok(Json(output))
}

/// DELETE /rank/{rank_id}/attribute/{id}
pub async fn delete_attribute(
    State(state): State<AppState>,
    Path((rank_id, id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    state.attributes.delete(&rank_id, &id).await?;
    Ok(deleted("attribute"))
}
