use crate::domain::{AppError, ImageRepository};
use crate::ports::ContainerRegistry;

/// Registry answering lookups from a fixed repository list.
pub struct FakeRegistry {
    repositories: Vec<ImageRepository>,
    failure: Option<String>,
}

impl FakeRegistry {
    pub fn with_repositories(repositories: Vec<ImageRepository>) -> Self {
        Self { repositories, failure: None }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self { repositories: vec![], failure: Some(message.into()) }
    }
}

impl ContainerRegistry for FakeRegistry {
    fn find_repositories(&self, name: &str) -> Result<Vec<ImageRepository>, AppError> {
        if let Some(message) = &self.failure {
            return Err(AppError::cloud_api("DescribeRepositories", message.clone()));
        }
        Ok(self.repositories.iter().filter(|repo| repo.name == name).cloned().collect())
    }
}
