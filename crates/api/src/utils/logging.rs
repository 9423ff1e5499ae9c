use std::time::Duration;

use merchplan_domain::{LoggingConfig, MerchPlanError, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `config.level`. Returns an error when a
/// subscriber is already installed or the directive is invalid.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.level).map_err(|e| {
            MerchPlanError::Config(format!("Invalid log level '{}': {}", config.level, e))
        })?,
    };

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);
    let installed = if config.json { builder.json().try_init() } else { builder.try_init() };

    installed.map_err(|e| MerchPlanError::Internal(format!("failed to install tracing subscriber: {e}")))
}

/// Log the outcome of a command execution with structured fields.
///
/// # Parameters
/// * `command` - Logical command identifier (e.g. `"planning::commit_forecast_cell"`).
/// * `elapsed` - Duration the command execution took.
/// * `success` - Whether the command completed successfully.
///
/// Callers must avoid forwarding cell values or other user data in `command`.
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, success: bool) {
    let duration_us = elapsed.as_micros() as u64;

    if success {
        info!(command, duration_us, "command_execution_success");
    } else {
        warn!(command, duration_us, "command_execution_failure");
    }
}

/// Convert a `MerchPlanError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &MerchPlanError) -> &'static str {
    match error {
        MerchPlanError::Storage(_) => "storage",
        MerchPlanError::Serialization(_) => "serialization",
        MerchPlanError::Config(_) => "config",
        MerchPlanError::NotFound(_) => "not_found",
        MerchPlanError::InvalidInput(_) => "invalid_input",
        MerchPlanError::Internal(_) => "internal",
    }
}
