//! Run configuration domain model.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::env_key::to_env_var_name;
use crate::domain::{AppError, ConfigFileCause};

/// Environment variable carrying the output bucket name into the container.
pub const BUCKET_ENV_VAR: &str = "S3_BUCKET";
/// Environment variable carrying the output object key into the container.
pub const OUTPUT_KEY_ENV_VAR: &str = "S3_OUTPUT_KEY";

const CPU_UNITS_PER_VCPU: u64 = 1024;

/// Configuration of a single task launch, loaded from a JSON file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunConfiguration {
    /// Name of the target cluster.
    pub cluster_name: String,
    /// Task definition family, also used as the container name.
    pub task_name: String,
    /// Image repository name; its latest image is run.
    pub image_name: String,
    /// Output bucket name.
    pub bucket_name: String,
    /// Object key of the output within the bucket.
    pub output_filename: String,
    /// Percentage of one vCPU to reserve.
    pub cpu_percentage: u32,
    /// Memory reservation in MiB.
    pub memory_usage: u32,
    /// Environment passed to the container, keyed in lowerCamelCase.
    pub run_environment: BTreeMap<String, EnvValue>,
}

/// A `runEnvironment` value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum EnvValue {
    Text(String),
    Integer(i64),
}

impl EnvValue {
    /// Convert a raw JSON value, rejecting anything but strings and integers.
    pub fn from_json(key: &str, value: &Value) -> Result<Self, AppError> {
        let kind = match value {
            Value::String(text) => return Ok(EnvValue::Text(text.clone())),
            Value::Number(number) => match number.as_i64() {
                Some(integer) => return Ok(EnvValue::Integer(integer)),
                None if number.is_f64() => "float",
                None => "unsigned integer out of range",
            },
            Value::Bool(_) => "boolean",
            Value::Null => "null",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        };

        Err(AppError::ConfigValue { key: key.to_string(), value: value.to_string(), kind })
    }
}

impl fmt::Display for EnvValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnvValue::Text(text) => f.write_str(text),
            EnvValue::Integer(integer) => write!(f, "{}", integer),
        }
    }
}

/// A container environment variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvVar {
    pub name: String,
    pub value: String,
}

impl EnvVar {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self { name: name.into(), value: value.into() }
    }
}

/// JSON document shape, before environment values are typed.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RunConfigDocument {
    cluster_name: String,
    task_name: String,
    image_name: String,
    bucket_name: String,
    output_filename: String,
    cpu_percentage: u32,
    memory_usage: u32,
    run_environment: BTreeMap<String, Value>,
}

impl RunConfiguration {
    /// Sample configuration rendered in the usage text.
    pub fn example() -> Self {
        let run_environment = ["takeN", "takeEveryN", "ignoreFirstN"]
            .into_iter()
            .map(|key| (key.to_string(), EnvValue::Integer(100)))
            .collect();

        Self {
            cluster_name: "my-eg".to_string(),
            task_name: "my-task".to_string(),
            image_name: "my-eg/primes".to_string(),
            bucket_name: uuid::Uuid::new_v4().to_string(),
            output_filename: "primes-output.txt".to_string(),
            cpu_percentage: 50,
            memory_usage: 128,
            run_environment,
        }
    }

    /// CPU reservation in ECS units, truncating.
    pub fn cpu_units(&self) -> u32 {
        let units = u64::from(self.cpu_percentage) * CPU_UNITS_PER_VCPU / 100;
        u32::try_from(units).unwrap_or(u32::MAX)
    }

    /// Container environment: the transformed `runEnvironment` entries followed
    /// by the output bucket and key.
    pub fn environment(&self) -> Vec<EnvVar> {
        let mut env: Vec<EnvVar> = self
            .run_environment
            .iter()
            .map(|(key, value)| EnvVar::new(to_env_var_name(key), value.to_string()))
            .collect();

        env.push(EnvVar::new(BUCKET_ENV_VAR, &self.bucket_name));
        env.push(EnvVar::new(OUTPUT_KEY_ENV_VAR, &self.output_filename));
        env
    }

    fn validate(&self) -> Result<(), String> {
        if self.cpu_percentage > 100 {
            return Err(format!(
                "cpuPercentage must be between 0 and 100, got {}",
                self.cpu_percentage
            ));
        }
        if self.memory_usage == 0 || i32::try_from(self.memory_usage).is_err() {
            return Err(format!(
                "memoryUsage must be a positive number of MiB, got {}",
                self.memory_usage
            ));
        }
        Ok(())
    }
}

/// Parse and validate a run configuration from JSON content.
///
/// `origin` names the file in errors.
pub fn parse_run_config(content: &str, origin: &Path) -> Result<RunConfiguration, AppError> {
    let file_error =
        |source: ConfigFileCause| AppError::ConfigFile { path: origin.to_path_buf(), source };

    let document: RunConfigDocument =
        serde_json::from_str(content).map_err(|e| file_error(e.into()))?;

    let run_environment = document
        .run_environment
        .iter()
        .map(|(key, value)| EnvValue::from_json(key, value).map(|typed| (key.clone(), typed)))
        .collect::<Result<BTreeMap<_, _>, AppError>>()?;

    let config = RunConfiguration {
        cluster_name: document.cluster_name,
        task_name: document.task_name,
        image_name: document.image_name,
        bucket_name: document.bucket_name,
        output_filename: document.output_filename,
        cpu_percentage: document.cpu_percentage,
        memory_usage: document.memory_usage,
        run_environment,
    };

    config.validate().map_err(|reason| file_error(ConfigFileCause::Invalid(reason)))?;
    Ok(config)
}
