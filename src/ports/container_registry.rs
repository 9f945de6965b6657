//! Container registry port definition.

use crate::domain::{AppError, ImageRepository};

/// Port for image repository lookups.
pub trait ContainerRegistry {
    /// List repositories whose name is exactly `name`.
    fn find_repositories(&self, name: &str) -> Result<Vec<ImageRepository>, AppError>;
}
