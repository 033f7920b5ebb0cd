//! Image upload handler.

use axum::{
    extract::{multipart::MultipartRejection, Multipart, Path, State},
    Json,
};

use ranking_core::files::detect_image_type;
use ranking_core::usecase::UploadOutput;

use super::AppError;
use crate::state::AppState;

/// Multipart field carrying the image.
const IMAGE_FIELD: &str = "image";

/// POST /rank/{id}/file
///
/// Reads the `image` field, rejects anything that does not sniff as an image
/// and stores it under a fresh name in the rank's folder.
pub async fn upload_file(
    State(state): State<AppState>,
    Path(rank_id): Path<String>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadOutput>, AppError> {
    let mut multipart = multipart?;

    let (filename, content) = loop {
        let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?
        else {
            return Err(AppError::BadRequest(format!(
                "missing form field \"{IMAGE_FIELD}\""
            )));
        };

        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let content = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        break (filename, content);
    };

    let Some(image_type) = detect_image_type(&content) else {
        tracing::warn!(rank_id = %rank_id, filename = %filename, "rejected non-image upload");
        return Err(AppError::UnsupportedMediaType);
    };
    tracing::debug!(rank_id = %rank_id, image_type = %image_type, size = content.len(), "image received");

    let output = state
        .uploads
        .upload(&rank_id, &filename, content.to_vec())
        .await?;
    Ok(Json(output))
}
