//! AWS SDK configuration shared by the DynamoDB and S3 clients.

use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_sdk_dynamodb::config::Credentials;

use crate::config::Config;

/// Loads the SDK configuration.
///
/// On Lambda the default credential chain is used. Anywhere else the
/// configuration points at the local endpoint with static credentials, which
/// LocalStack accepts regardless of their value.
pub async fn load_sdk_config(config: &Config) -> SdkConfig {
    let mut loader = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(config.region.clone()));

    if let Some(endpoint) = &config.endpoint_url {
        loader = loader.endpoint_url(endpoint);
    }

    if !config.on_lambda {
        loader = loader.credentials_provider(Credentials::new("xyz", "123", None, None, "static"));
    }

    let sdk_config = loader.load().await;

    tracing::info!(
        region = %config.region,
        endpoint = config.endpoint_url.as_deref().unwrap_or("default"),
        on_lambda = config.on_lambda,
        "Loaded AWS configuration"
    );

    sdk_config
}
