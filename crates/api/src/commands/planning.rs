//! Planning grid commands

use merchplan_core::{materialize, Calendar};
use merchplan_domain::{
    FieldKey, ForecastInput, PlanningCollection, PlanningItem, PlanningRow, Result,
};
use tracing::debug;

use crate::context::PlanningState;
use crate::utils::coercion::coerce_number;
use crate::utils::command_helpers::execute_command;
use crate::AppContext;

pub(crate) fn current_grid(state: &PlanningState, calendar: &Calendar) -> Vec<PlanningRow> {
    materialize(state.stores.list(), state.skus.list(), state.planning.collection(), calendar.weeks())
}

/// One row per (store, SKU) over the whole calendar.
pub fn planning_grid(ctx: &AppContext) -> Result<Vec<PlanningRow>> {
    execute_command("planning::planning_grid", || {
        ctx.with_state(|state| Ok(current_grid(state, ctx.calendar())))
    })
}

/// Commit a grid cell edit.
///
/// Only `<week>_salesUnits` cells of calendar weeks are editable. Price and
/// cost are read from the live SKU. Returns `false` when the edit is
/// declined: unknown or derived field, unknown week, non-numeric input, or a
/// store or SKU that no longer exists.
pub fn commit_forecast_cell(
    ctx: &AppContext,
    store_id: &str,
    sku_id: &str,
    field_key: &str,
    raw_value: &str,
) -> Result<bool> {
    execute_command("planning::commit_forecast_cell", || {
        let Some(key) = FieldKey::parse(field_key).filter(|key| key.metric.is_editable()) else {
            debug!(field_key, "field is not an editable forecast cell");
            return Ok(false);
        };
        if !ctx.calendar().contains(&key.week_id) {
            debug!(week = %key.week_id, "week not in calendar");
            return Ok(false);
        }
        let Some(sales_units) = coerce_number(raw_value) else {
            debug!(field_key, "non-numeric forecast input declined");
            return Ok(false);
        };

        ctx.with_state(|state| {
            let Some(sku) = state.skus.get(sku_id) else {
                return Ok(false);
            };
            if state.stores.get(store_id).is_none() {
                return Ok(false);
            }
            let input = ForecastInput {
                store_id: store_id.to_string(),
                sku_id: sku_id.to_string(),
                week_id: key.week_id,
                sales_units,
                price: sku.price,
                cost: sku.cost,
            };
            state.planning.upsert_forecast(&input)
        })
    })
}

pub fn delete_planning_item(ctx: &AppContext, store_id: &str, sku_id: &str) -> Result<bool> {
    execute_command("planning::delete_planning_item", || {
        ctx.with_state(|state| state.planning.delete_item(store_id, sku_id))
    })
}

/// Replace the whole planning collection, e.g. on import.
pub fn replace_planning_data(ctx: &AppContext, items: Vec<PlanningItem>) -> Result<()> {
    execute_command("planning::replace_planning_data", || {
        ctx.with_state(|state| state.planning.replace_all(PlanningCollection::from_items(items)))
    })
}
