use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for run-ecs operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Run configuration file could not be read or mapped onto the schema.
    #[error("Couldn't parse config file {}", path.display())]
    ConfigFile {
        path: PathBuf,
        #[source]
        source: ConfigFileCause,
    },

    /// A `runEnvironment` value is neither a string nor an integer.
    #[error(
        "Couldn't parse config file, the value {value} of type {kind} for '{key}' couldn't be converted into a string or integer"
    )]
    ConfigValue { key: String, value: String, kind: &'static str },

    /// Image repository lookup did not yield exactly one repository.
    #[error("Couldn't find repository {0}")]
    RepositoryNotFound(String),

    /// Cluster lookup did not yield exactly one cluster.
    #[error("Couldn't find cluster '{0}'")]
    ClusterNotFound(String),

    /// Run-task did not report exactly one started task.
    #[error(
        "Tasks returned for task definition {task_definition} on cluster {cluster} didn't start? started={started}, failures=[{failures}]"
    )]
    TaskNotStarted { task_definition: String, cluster: String, started: usize, failures: String },

    /// Remote cloud API call failed.
    #[error("{operation} failed: {message}")]
    CloudApi { operation: &'static str, message: String },
}

/// Underlying cause of a [`AppError::ConfigFile`] failure.
#[derive(Debug, Error)]
pub enum ConfigFileCause {
    #[error("read failed")]
    Read(#[from] io::Error),

    #[error("content doesn't match the expected schema")]
    Parse(#[from] serde_json::Error),

    #[error("invalid value: {0}")]
    Invalid(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn cloud_api(operation: &'static str, message: impl Into<String>) -> Self {
        AppError::CloudApi { operation, message: message.into() }
    }

    /// Provide an `io::ErrorKind`-like view of the failure.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::ConfigFile { .. }
            | AppError::ConfigValue { .. } => io::ErrorKind::InvalidInput,
            AppError::RepositoryNotFound(_) | AppError::ClusterNotFound(_) => {
                io::ErrorKind::NotFound
            }
            AppError::TaskNotStarted { .. } | AppError::CloudApi { .. } => io::ErrorKind::Other,
        }
    }
}
