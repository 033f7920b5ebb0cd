//! Entry CRUD handlers, scoped under a rank.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use ranking_core::ranking::EntryRequest;

use super::{deleted, AppError};
use crate::state::AppState;

// ============================================================================
// Create / Read
// ============================================================================

/// POST /rank/{rank_id}/entry
pub async fn create_entry(
    State(state): State<AppState>,
    Path(rank_id): Path<String>,
    body: Result<Json<EntryRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(request) = body?;
    let output = state.entries.create(request.into_entry(rank_id)).await?;
    Ok((StatusCode::CREATED, Json(output)))
}

/// GET /rank/{rank_id}/entry/{id}
pub async fn get_entry(
    State(state): State<AppState>,
    Path((rank_id, id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let output = state.entries.find(&rank_id, &id).await?;
    Ok(Json(output))
}

// ============================================================================
// Update / Delete
// ============================================================================

/// PUT /rank/{rank_id}/entry/{id}
///
/// The scores map is replaced as a whole.
pub async fn update_entry(
    State(state): State<AppState>,
    Path((rank_id, id)): Path<(String, String)>,
    body: Result<Json<EntryRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(request) = body?;
    let output = state
        .entries
        .update(request.into_entry_with_id(rank_id, id))
        .await?;
    Ok(Json(output))
}

/// DELETE /rank/{rank_id}/entry/{id}
pub async fn delete_entry(
    State(state): State<AppState>,
    Path((rank_id, id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    state.entries.delete(&rank_id, &id).await?;
    Ok(deleted("entry"))
}
