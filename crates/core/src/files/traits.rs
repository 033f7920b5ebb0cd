use async_trait::async_trait;

use super::FileStorageError;

pub type Result<T> = std::result::Result<T, FileStorageError>;

/// Object store that accepts a file and returns its public URL.
#[async_trait]
pub trait FileStorage: Send + Sync {
    /// Stores `content` under `path` and returns the URL it is served from.
    async fn upload(&self, path: &str, content: Vec<u8>) -> Result<String>;
}
