use std::sync::Arc;

use aws_sdk_ecr::Client;
use tokio::runtime::Runtime;

use super::sdk_error;
use crate::domain::{AppError, ImageRepository};
use crate::ports::ContainerRegistry;

/// Elastic Container Registry lookups.
pub struct EcrRegistry {
    client: Client,
    runtime: Arc<Runtime>,
}

impl EcrRegistry {
    pub fn new(client: Client, runtime: Arc<Runtime>) -> Self {
        Self { client, runtime }
    }
}

impl ContainerRegistry for EcrRegistry {
    fn find_repositories(&self, name: &str) -> Result<Vec<ImageRepository>, AppError> {
        let output = self
            .runtime
            .block_on(self.client.describe_repositories().repository_names(name).send())
            .map_err(|e| sdk_error("DescribeRepositories", &e))?;

        Ok(output
            .repositories()
            .iter()
            .filter_map(|repository| {
                Some(ImageRepository {
                    name: repository.repository_name()?.to_string(),
                    uri: repository.repository_uri()?.to_string(),
                })
            })
            .collect())
    }
}
