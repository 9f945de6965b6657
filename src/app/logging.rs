//! Diagnostic logging on stderr; stdout stays reserved for results.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::domain::{AppError, LogFormat, LogSettings};

/// Install the global `tracing` subscriber.
pub fn init_logger(settings: &LogSettings) -> Result<(), AppError> {
    let filter = EnvFilter::try_new(&settings.filter).map_err(|e| {
        AppError::config_error(format!("Invalid log filter '{}': {}", settings.filter, e))
    })?;

    let registry = tracing_subscriber::registry().with(filter);
    let result = match settings.format {
        LogFormat::Text => {
            registry.with(fmt::layer().with_writer(std::io::stderr).with_target(false)).try_init()
        }
        LogFormat::Json => registry
            .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
            .try_init(),
    };

    result.map_err(|e| AppError::config_error(format!("Failed to initialize logger: {}", e)))
}
