//! Command execution helpers
//!
//! Provides utilities to reduce boilerplate when implementing commands with
//! timing and logging.

use std::time::Instant;

use merchplan_domain::Result as DomainResult;
use tracing::error;

use crate::utils::logging::{error_label, log_command_execution};

/// Execute a command with automatic timing and logging
///
/// # Example
///
/// ```rust,ignore
/// pub fn my_command(ctx: &AppContext) -> DomainResult<Vec<Store>> {
///     execute_command("stores::my_command", || {
///         ctx.with_state(|state| Ok(state.stores.list().to_vec()))
///     })
/// }
/// ```
pub fn execute_command<F, T>(command_name: &str, command_fn: F) -> DomainResult<T>
where
    F: FnOnce() -> DomainResult<T>,
{
    let start = Instant::now();
    let result = command_fn();
    let elapsed = start.elapsed();

    if let Err(err) = &result {
        error!(command = command_name, error_type = error_label(err), error = %err, "command failed");
    }
    log_command_execution(command_name, elapsed, result.is_ok());

    result
}
