//! Cloud resources resolved, registered or created during a launch.

use std::fmt;

use crate::domain::{AppError, EnvVar, RunConfiguration};

/// An image repository in the container registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRepository {
    pub name: String,
    /// Fully qualified repository URI; pulls resolve to its latest image.
    pub uri: String,
}

/// A compute cluster of the container service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cluster {
    pub name: String,
    pub arn: String,
}

/// A registered task definition revision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDefinition {
    pub family: String,
    pub arn: String,
    pub revision: i32,
}

impl fmt::Display for TaskDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} ({})", self.family, self.revision, self.arn)
    }
}

/// Outcome of describing a task definition family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskDefinitionLookup {
    Found(TaskDefinition),
    /// The service reports no definition registered under the family.
    NotFound,
}

/// The single container of a newly registered task definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerSpec {
    pub name: String,
    pub image: String,
    pub cpu_units: i32,
    pub memory_mib: i32,
    pub environment: Vec<EnvVar>,
}

impl ContainerSpec {
    /// Build the container for `config`, running the image at `image_uri`.
    pub fn for_task(config: &RunConfiguration, image_uri: &str) -> Result<Self, AppError> {
        let cpu_units = i32::try_from(config.cpu_units()).map_err(|_| {
            AppError::config_error(format!("CPU units out of range: {}", config.cpu_units()))
        })?;
        let memory_mib = i32::try_from(config.memory_usage).map_err(|_| {
            AppError::config_error(format!("memoryUsage out of range: {}", config.memory_usage))
        })?;

        Ok(Self {
            name: config.task_name.clone(),
            image: image_uri.to_string(),
            cpu_units,
            memory_mib,
            environment: config.environment(),
        })
    }
}

/// Request to start instances of a task definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunTaskRequest {
    pub task_definition_arn: String,
    pub cluster_arn: String,
    pub count: i32,
}

/// A task reported as started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartedTask {
    pub arn: String,
}

/// A placement failure reported by run-task.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskFailure {
    pub arn: Option<String>,
    pub reason: Option<String>,
}

impl fmt::Display for TaskFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}",
            self.arn.as_deref().unwrap_or("<unknown>"),
            self.reason.as_deref().unwrap_or("<no reason>")
        )
    }
}

/// Response of run-task.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunTaskOutcome {
    pub tasks: Vec<StartedTask>,
    pub failures: Vec<TaskFailure>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn container_spec_carries_config_and_image() {
        let config = RunConfiguration::example();
        let container = ContainerSpec::for_task(&config, "123.dkr.ecr/my-eg/primes").unwrap();

        assert_eq!(container.name, "my-task");
        assert_eq!(container.image, "123.dkr.ecr/my-eg/primes");
        assert_eq!(container.cpu_units, 512);
        assert_eq!(container.memory_mib, 128);
        assert_eq!(container.environment.len(), config.run_environment.len() + 2);
    }

    #[test]
    fn failure_display_fills_missing_parts() {
        let failure = TaskFailure { arn: None, reason: Some("RESOURCE:MEMORY".into()) };
        assert_eq!(failure.to_string(), "<unknown>: RESOURCE:MEMORY");
    }
}
