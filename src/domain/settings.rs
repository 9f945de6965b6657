//! Process-level settings read from the environment.

use std::str::FromStr;

use url::Url;

use crate::domain::AppError;

pub const REGION_VAR: &str = "RUN_ECS_REGION";
pub const ENDPOINT_URL_VAR: &str = "RUN_ECS_ENDPOINT_URL";
pub const LOG_VAR: &str = "RUN_ECS_LOG";
pub const LOG_FORMAT_VAR: &str = "RUN_ECS_LOG_FORMAT";

const DEFAULT_LOG_FILTER: &str = "warn";

/// Settings that are not part of the run configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Settings {
    pub cloud: CloudSettings,
    pub log: LogSettings,
}

/// Where and how the cloud services are reached.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CloudSettings {
    /// Region override; the SDK provider chain decides when unset.
    pub region: Option<String>,
    /// Endpoint override applied to every service client.
    pub endpoint_url: Option<Url>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    /// `tracing` filter directive.
    pub filter: String,
    pub format: LogFormat,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self { filter: DEFAULT_LOG_FILTER.to_string(), format: LogFormat::default() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(AppError::config_error(format!(
                "Invalid {}: '{}' (expected 'text' or 'json')",
                LOG_FORMAT_VAR, other
            ))),
        }
    }
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read settings through `lookup`; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let endpoint_url = get(ENDPOINT_URL_VAR)
            .map(|raw| {
                Url::parse(raw.trim()).map_err(|e| {
                    AppError::config_error(format!("Invalid {} '{}': {}", ENDPOINT_URL_VAR, raw, e))
                })
            })
            .transpose()?;

        let format = get(LOG_FORMAT_VAR).map(|raw| raw.parse()).transpose()?.unwrap_or_default();

        Ok(Self {
            cloud: CloudSettings {
                region: get(REGION_VAR).map(|region| region.trim().to_string()),
                endpoint_url,
            },
            log: LogSettings {
                filter: get(LOG_VAR).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
                format,
            },
        })
    }
}
