pub mod env_key;
pub mod error;
pub mod resources;
pub mod retention;
pub mod run_config;
pub mod settings;

pub use error::{AppError, ConfigFileCause};
pub use resources::{
    Cluster, ContainerSpec, ImageRepository, RunTaskOutcome, RunTaskRequest, StartedTask,
    TaskDefinition, TaskDefinitionLookup, TaskFailure,
};
pub use retention::{ExpirationRule, OutputLink};
pub use run_config::{EnvValue, EnvVar, RunConfiguration, parse_run_config};
pub use settings::{CloudSettings, LogFormat, LogSettings, Settings};
