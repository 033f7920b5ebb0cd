use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use ranking_core::files::{FileStorage, Result};

/// Keeps uploaded files in memory. Used by the local backend and tests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFileStorage {
    files: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl InMemoryFileStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl InMemoryFileStorage {
    /// Returns the stored content at `path`, if any.
    pub async fn get(&self, path: &str) -> Option<Vec<u8>> {
        self.files.read().await.get(path).cloned()
    }

    pub async fn len(&self) -> usize {
        self.files.read().await.len()
    }
}

#[async_trait]
impl FileStorage for InMemoryFileStorage {
    async fn upload(&self, path: &str, content: Vec<u8>) -> Result<String> {
        self.files.write().await.insert(path.to_string(), content);
        Ok(format!("memory://{path}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_upload_stores_content() {
        let storage = InMemoryFileStorage::new();

        let url = storage.upload("R1/a.png", vec![1, 2]).await.unwrap();

        assert_eq!(url, "memory://R1/a.png");
        assert_eq!(storage.get("R1/a.png").await, Some(vec![1, 2]));
        assert_eq!(storage.len().await, 1);
    }

    #[tokio::test]
    async fn test_upload_same_path_overwrites() {
        let storage = InMemoryFileStorage::new();

        storage.upload("R1/a.png", vec![1]).await.unwrap();
        storage.upload("R1/a.png", vec![2]).await.unwrap();

        assert_eq!(storage.get("R1/a.png").await, Some(vec![2]));
        assert_eq!(storage.len().await, 1);
    }
}
