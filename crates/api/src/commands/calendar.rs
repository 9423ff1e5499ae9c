//! Calendar commands

use merchplan_domain::{CalendarWeek, Result};

use crate::utils::command_helpers::execute_command;
use crate::AppContext;

/// Weeks of the planning calendar, in column order.
pub fn calendar_weeks(ctx: &AppContext) -> Result<Vec<CalendarWeek>> {
    execute_command("calendar::calendar_weeks", || Ok(ctx.calendar().weeks().to_vec()))
}
