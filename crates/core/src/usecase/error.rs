use thiserror::Error;

use crate::files::FileStorageError;
use crate::ranking::ValidationErrors;
use crate::storage::RepositoryError;

/// Errors returned by the application services.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UsecaseError {
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),
    #[error("{kind} not found: {id}")]
    ResourceNotFound { kind: &'static str, id: String },
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    FileStorage(#[from] FileStorageError),
}

impl UsecaseError {
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        UsecaseError::ResourceNotFound {
            kind,
            id: id.into(),
        }
    }
}

impl From<ValidationErrors> for UsecaseError {
    fn from(errors: ValidationErrors) -> Self {
        UsecaseError::Validation(errors)
    }
}

pub type Result<T> = std::result::Result<T, UsecaseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let error = UsecaseError::not_found("attribute", "A1");
        assert_eq!(error.to_string(), "attribute not found: A1");
    }

    #[test]
    fn test_repository_error_is_transparent() {
        let error = UsecaseError::from(RepositoryError::QueryFailed("throttled".to_string()));
        assert_eq!(error.to_string(), "Query failed: throttled");
    }
}
