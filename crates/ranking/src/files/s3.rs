//! S3 file storage.
//!
//! Objects are written with the public-read ACL and addressed by a URL
//! derived from the bucket, region and endpoint.

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::ObjectCannedAcl;
use aws_sdk_s3::Client;
use tracing::debug;

use ranking_core::files::{detect_image_type, FileStorage, FileStorageError, Result};

use crate::config::Config;

/// Uploads rank images to an S3 bucket.
#[derive(Debug, Clone)]
pub struct S3FileStorage {
    client: Client,
    bucket: String,
    region: String,
    endpoint_url: Option<String>,
    on_lambda: bool,
}

impl S3FileStorage {
    /// Builds the S3 client from the shared SDK configuration.
    ///
    /// A custom endpoint (LocalStack) needs path-style addressing.
    pub fn new(sdk_config: &SdkConfig, config: &Config) -> Self {
        let s3_config = aws_sdk_s3::config::Builder::from(sdk_config)
            .force_path_style(config.endpoint_url.is_some())
            .build();

        Self {
            client: Client::from_conf(s3_config),
            bucket: config.bucket_name.clone(),
            region: config.region.clone(),
            endpoint_url: config.endpoint_url.clone(),
            on_lambda: config.on_lambda,
        }
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }
}

#[async_trait]
impl FileStorage for S3FileStorage {
    async fn upload(&self, path: &str, content: Vec<u8>) -> Result<String> {
        let content_type = detect_image_type(&content).map(|t| t.mime_type());
        debug!(bucket = %self.bucket, key = %path, size = content.len(), "PutObject");

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(path)
            .acl(ObjectCannedAcl::PublicRead)
            .set_content_type(content_type.map(str::to_string))
            .body(ByteStream::from(content))
            .send()
            .await
            .map_err(|e| FileStorageError::UploadFailed(format!("{path}: {e:?}")))?;

        Ok(object_url(
            &self.bucket,
            &self.region,
            self.endpoint_url.as_deref(),
            self.on_lambda,
            path,
        ))
    }
}

/// Public URL of an uploaded object.
///
/// On Lambda this is the virtual-hosted regional URL. Elsewhere the object
/// lives under the custom endpoint with path-style addressing.
pub fn object_url(
    bucket: &str,
    region: &str,
    endpoint_url: Option<&str>,
    on_lambda: bool,
    path: &str,
) -> String {
    match endpoint_url {
        Some(endpoint) if !on_lambda => {
            format!("{}/{bucket}/{path}", endpoint.trim_end_matches('/'))
        }
        _ => format!("https://{bucket}.s3-{region}.amazonaws.com/{path}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_url_on_lambda() {
        let url = object_url("ranking", "sa-east-1", None, true, "R1/a.png");
        assert_eq!(url, "https://ranking.s3-sa-east-1.amazonaws.com/R1/a.png");
    }

    #[test]
    fn test_object_url_local() {
        let url = object_url(
            "ranking",
            "us-east-1",
            Some("http://localhost:4566/"),
            false,
            "R1/a.png",
        );
        assert_eq!(url, "http://localhost:4566/ranking/R1/a.png");
    }

    #[test]
    fn test_lambda_ignores_custom_endpoint() {
        let url = object_url("ranking", "us-east-1", Some("http://x"), true, "R1/a.png");
        assert_eq!(url, "https://ranking.s3-us-east-1.amazonaws.com/R1/a.png");
    }
}
