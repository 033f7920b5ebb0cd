//! Pure mapping from use case errors to HTTP status codes.

use crate::storage::repository_error_to_status_code;

use super::UsecaseError;

/// Maps a [`UsecaseError`] to an HTTP status code.
///
/// - `Validation` -> 422 (Unprocessable Entity)
/// - `ResourceNotFound` -> 404 (Not Found)
/// - `Repository` -> delegated to [`repository_error_to_status_code`]
/// - `FileStorage` -> 500 (Internal Server Error)
pub fn usecase_error_to_status_code(error: &UsecaseError) -> u16 {
    match error {
        UsecaseError::Validation(_) => 422,
        UsecaseError::ResourceNotFound { .. } => 404,
        UsecaseError::Repository(e) => repository_error_to_status_code(e),
        UsecaseError::FileStorage(_) => 500,
    }
}
