//! Run configuration loading from the filesystem.

use std::fs;
use std::path::Path;

use crate::domain::{AppError, ConfigFileCause, RunConfiguration, parse_run_config};

/// Load and parse the run configuration at `path`.
pub fn load_run_config(path: &Path) -> Result<RunConfiguration, AppError> {
    let content = fs::read_to_string(path).map_err(|e| AppError::ConfigFile {
        path: path.to_path_buf(),
        source: ConfigFileCause::Read(e),
    })?;

    parse_run_config(&content, path)
}
