use std::{env, time::Duration};

/// Endpoint of the LocalStack container used for local development.
pub const LOCAL_ENDPOINT_URL: &str = "http://localhost:4566";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// DynamoDB table holding ranks, attributes and entries (default: "rank")
    pub table_name: String,
    /// Secondary index keyed by rank id (default: "gsi")
    pub index_name: String,
    /// S3 bucket receiving uploads (default: "ranking")
    pub bucket_name: String,
    /// AWS region (default: "us-east-1")
    pub region: String,
    /// Custom AWS endpoint. Defaults to LocalStack outside Lambda, none on Lambda.
    pub endpoint_url: Option<String>,
    /// Whether the process runs inside AWS Lambda.
    pub on_lambda: bool,
    /// Port assigned by the Lambda web adapter, overrides `--port` when set.
    pub lambda_port: Option<u16>,
    /// Per-request timeout in seconds (default: 10)
    pub request_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DYNAMODB_TABLE_NAME` - Table name (default: "rank")
    /// - `DYNAMODB_INDEX_NAME` - Rank index name (default: "gsi")
    /// - `S3_BUCKET_NAME` - Upload bucket (default: "ranking")
    /// - `AWS_REGION` - AWS region (default: "us-east-1")
    /// - `AWS_ENDPOINT_URL` - Custom endpoint (default: LocalStack off Lambda)
    /// - `AWS_LAMBDA_FUNCTION_NAME` - Presence marks a Lambda runtime
    /// - `_LAMBDA_SERVER_PORT` - Port override on Lambda
    /// - `REQUEST_TIMEOUT_SECONDS` - Request timeout (default: 10)
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let on_lambda = lookup("AWS_LAMBDA_FUNCTION_NAME").is_some();
        let endpoint_url = match lookup("AWS_ENDPOINT_URL") {
            Some(url) => Some(url),
            None if on_lambda => None,
            None => Some(LOCAL_ENDPOINT_URL.to_string()),
        };

        Self {
            table_name: lookup("DYNAMODB_TABLE_NAME").unwrap_or_else(|| "rank".to_string()),
            index_name: lookup("DYNAMODB_INDEX_NAME").unwrap_or_else(|| "gsi".to_string()),
            bucket_name: lookup("S3_BUCKET_NAME").unwrap_or_else(|| "ranking".to_string()),
            region: lookup("AWS_REGION").unwrap_or_else(|| "us-east-1".to_string()),
            endpoint_url,
            on_lambda,
            lambda_port: lookup("_LAMBDA_SERVER_PORT").and_then(|v| v.parse().ok()),
            request_timeout_seconds: lookup("REQUEST_TIMEOUT_SECONDS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }

    /// Get the request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_vars(|_| None)
    }
}
