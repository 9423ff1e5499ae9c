//! Chart commands

use merchplan_core::gross_margin_series;
use merchplan_domain::{Result, WeeklyMargin};

use super::planning::current_grid;
use crate::utils::command_helpers::execute_command;
use crate::AppContext;

/// Weekly gross margin totals across the whole grid.
pub fn gross_margin_chart(ctx: &AppContext) -> Result<Vec<WeeklyMargin>> {
    execute_command("chart::gross_margin_chart", || {
        ctx.with_state(|state| {
            let rows = current_grid(state, ctx.calendar());
            Ok(gross_margin_series(&rows, ctx.calendar().weeks()))
        })
    })
}
