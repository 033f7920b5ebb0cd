use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FileStorageError {
    #[error("upload failed: {0}")]
    UploadFailed(String),
}
