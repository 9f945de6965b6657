//! run-ecs: launch a single containerized batch job on ECS from a JSON configuration file.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{LaunchReport, launch};
pub use app::cli::usage_text;
pub use domain::{AppError, RunConfiguration, Settings};
