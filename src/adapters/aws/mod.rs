//! AWS implementations of the registry, container service and storage ports.
//!
//! The SDK is async; every adapter drives it through one shared
//! current-thread runtime so the ports stay blocking.

mod ecr;
mod ecs;
mod s3;

use std::fmt;
use std::sync::Arc;

use aws_config::{BehaviorVersion, ConfigLoader, SdkConfig};
use aws_sdk_ecs::config::Region;
use aws_sdk_ecs::error::DisplayErrorContext;
use tokio::runtime::{Builder, Runtime};
use tracing::debug;

use crate::domain::{AppError, CloudSettings};

pub use ecr::EcrRegistry;
pub use ecs::EcsContainerService;
pub use s3::S3ObjectStorage;

/// Loaded SDK configuration plus the runtime that drives every client.
pub struct AwsSession {
    runtime: Arc<Runtime>,
    config: SdkConfig,
    path_style: bool,
}

impl fmt::Debug for AwsSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AwsSession")
            .field("region", &self.region())
            .field("path_style", &self.path_style)
            .finish()
    }
}

impl AwsSession {
    /// Resolve region and credentials through the SDK provider chain,
    /// applying the overrides in `settings`.
    pub fn load(settings: &CloudSettings) -> Result<Self, AppError> {
        Self::load_with(settings, aws_config::defaults(BehaviorVersion::latest()))
    }

    fn load_with(settings: &CloudSettings, mut loader: ConfigLoader) -> Result<Self, AppError> {
        let runtime = Builder::new_current_thread().enable_all().build()?;

        if let Some(region) = &settings.region {
            loader = loader.region(Region::new(region.clone()));
        }
        if let Some(endpoint) = &settings.endpoint_url {
            loader = loader.endpoint_url(endpoint.as_str());
        }
        let config = runtime.block_on(loader.load());

        let session = Self {
            runtime: Arc::new(runtime),
            config,
            path_style: settings.endpoint_url.is_some(),
        };
        debug!(session = ?session, "Loaded AWS configuration");
        Ok(session)
    }

    pub fn region(&self) -> Option<&str> {
        self.config.region().map(|region| region.as_ref())
    }

    pub fn registry(&self) -> EcrRegistry {
        EcrRegistry::new(aws_sdk_ecr::Client::new(&self.config), Arc::clone(&self.runtime))
    }

    pub fn containers(&self) -> EcsContainerService {
        EcsContainerService::new(
            aws_sdk_ecs::Client::new(&self.config),
            Arc::clone(&self.runtime),
        )
    }

    /// S3 switches to path-style addressing when an endpoint override is set.
    pub fn storage(&self) -> S3ObjectStorage {
        let config = aws_sdk_s3::config::Builder::from(&self.config)
            .force_path_style(self.path_style)
            .build();
        S3ObjectStorage::new(
            aws_sdk_s3::Client::from_conf(config),
            self.region().map(str::to_string),
            Arc::clone(&self.runtime),
        )
    }
}

/// Render an SDK failure with its full cause chain.
fn sdk_error<E>(operation: &'static str, error: &E) -> AppError
where
    E: std::error::Error,
{
    AppError::cloud_api(operation, DisplayErrorContext(error).to_string())
}

#[cfg(test)]
impl AwsSession {
    /// Session against a local endpoint with static credentials and no retries.
    pub(crate) fn for_endpoint(endpoint: &str, region: &str) -> Self {
        use aws_config::retry::RetryConfig;
        use aws_sdk_s3::config::Credentials;

        let settings = CloudSettings {
            region: Some(region.to_string()),
            endpoint_url: Some(url::Url::parse(endpoint).unwrap()),
        };
        let loader = aws_config::defaults(BehaviorVersion::latest())
            .credentials_provider(Credentials::new("AKIDTEST", "secret", None, None, "test"))
            .retry_config(RetryConfig::disabled());

        Self::load_with(&settings, loader).unwrap()
    }
}
