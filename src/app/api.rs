//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::Path;

use crate::adapters::aws::AwsSession;
use crate::app::config::load_run_config;
use crate::app::{AppContext, commands::launch};
use crate::ports::SystemClock;

pub use crate::app::commands::launch::LaunchReport;
pub use crate::domain::{AppError, RunConfiguration, Settings};

/// Load the run configuration at `config_path` and launch its task on AWS.
///
/// The configuration is fully validated before any AWS client is created.
pub fn launch(config_path: &Path, settings: &Settings) -> Result<LaunchReport, AppError> {
    let config = load_run_config(config_path)?;

    let session = AwsSession::load(&settings.cloud)?;
    let ctx =
        AppContext::new(session.registry(), session.containers(), session.storage(), SystemClock);

    launch::execute(&ctx, &config)
}
