//! Container orchestration service port definition.

use crate::domain::{
    AppError, Cluster, ContainerSpec, RunTaskOutcome, RunTaskRequest, TaskDefinition,
    TaskDefinitionLookup,
};

/// Port for cluster, task definition and task operations.
pub trait ContainerService {
    /// List clusters matching `name`.
    fn find_clusters(&self, name: &str) -> Result<Vec<Cluster>, AppError>;

    /// Describe the latest active revision of `family`.
    ///
    /// An unknown family is `Ok(NotFound)`; any other failure is an error.
    fn describe_task_definition(&self, family: &str) -> Result<TaskDefinitionLookup, AppError>;

    /// Register a new revision of `family` with a single container.
    fn register_task_definition(
        &self,
        family: &str,
        container: &ContainerSpec,
    ) -> Result<TaskDefinition, AppError>;

    /// Start tasks of a registered definition.
    fn run_task(&self, request: &RunTaskRequest) -> Result<RunTaskOutcome, AppError>;
}
