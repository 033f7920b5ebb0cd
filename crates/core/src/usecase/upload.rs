use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::files::{upload_path, FileStorage};
use crate::ranking::{is_uuid, Validator};

use super::{Result, UploadOutput, UsecaseError};

/// Stores an image for a rank under a fresh name.
#[derive(Clone)]
pub struct UploadUsecases {
    storage: Arc<dyn FileStorage>,
}

impl UploadUsecases {
    pub fn new(storage: Arc<dyn FileStorage>) -> Self {
        Self { storage }
    }

    /// Uploads `content` to `<rank_id>/<new uuid><ext>` and returns its URL.
    ///
    /// The rank id becomes a path segment, so it has to be a UUID.
    pub async fn upload(
        &self,
        rank_id: &str,
        filename: &str,
        content: Vec<u8>,
    ) -> Result<UploadOutput> {
        let mut v = Validator::new();
        v.check(is_uuid(rank_id), "rank_id", "must be a valid UUID");
        v.finish().map_err(UsecaseError::Validation)?;

        let path = upload_path(rank_id, &Uuid::new_v4().to_string(), filename);
        let url = self.storage.upload(&path, content).await?;
        info!(rank_id = %rank_id, path = %path, "file uploaded");
        Ok(UploadOutput { url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::files::FileStorageError;
    use crate::usecase::testing::FakeFiles;

    const RANK_ID: &str = "1ac85e34-cb6f-40c9-97bb-16267877bb13";

    #[tokio::test]
    async fn test_upload_path_keeps_extension() {
        let files = Arc::new(FakeFiles::default());
        let uc = UploadUsecases::new(files.clone());

        let output = uc.upload(RANK_ID, "snes.png", vec![1, 2, 3]).await.unwrap();

        let uploads = files.uploads.lock().unwrap();
        let (path, content) = &uploads[0];
        assert!(path.starts_with(&format!("{RANK_ID}/")));
        assert!(path.ends_with(".png"));
        let name = path.trim_start_matches(&format!("{RANK_ID}/")).trim_end_matches(".png");
        assert!(is_uuid(name));
        assert_eq!(content, &vec![1, 2, 3]);
        assert_eq!(output.url, format!("https://files.test/{path}"));
    }

    #[tokio::test]
    async fn test_upload_generates_fresh_names() {
        let files = Arc::new(FakeFiles::default());
        let uc = UploadUsecases::new(files.clone());

        uc.upload(RANK_ID, "a.png", vec![]).await.unwrap();
        uc.upload(RANK_ID, "a.png", vec![]).await.unwrap();

        let uploads = files.uploads.lock().unwrap();
        assert_ne!(uploads[0].0, uploads[1].0);
    }

    #[tokio::test]
    async fn test_upload_rejects_non_uuid_rank() {
        let files = Arc::new(FakeFiles::default());
        let uc = UploadUsecases::new(files.clone());

        let err = uc.upload("../etc", "a.png", vec![]).await.unwrap_err();

        assert!(matches!(err, UsecaseError::Validation(_)));
        assert!(files.uploads.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_storage_errors_propagate() {
        let files = Arc::new(FakeFiles {
            fail: true,
            ..Default::default()
        });
        let uc = UploadUsecases::new(files);

        let err = uc.upload(RANK_ID, "a.png", vec![]).await.unwrap_err();
        assert!(matches!(
            err,
            UsecaseError::FileStorage(FileStorageError::UploadFailed(_))
        ));
    }
}
