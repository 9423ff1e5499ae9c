//! SKU grid commands

use merchplan_domain::{GridRecord, Result, Sku, SkuDraft, SkuEdit};
use tracing::debug;

use super::{delete_catalog_row, edit_catalog_row, RowKey};
use crate::utils::coercion::coerce_number;
use crate::utils::command_helpers::execute_command;
use crate::AppContext;

pub type SkuRow = GridRecord<Sku, SkuDraft>;

/// Saved SKUs followed by draft rows.
pub fn list_sku_rows(ctx: &AppContext) -> Result<Vec<SkuRow>> {
    execute_command("skus::list_sku_rows", || ctx.with_state(|state| Ok(state.skus.rows())))
}

pub fn add_sku_row(ctx: &AppContext) -> Result<SkuDraft> {
    execute_command("skus::add_sku_row", || ctx.with_state(|state| state.skus.add_draft()))
}

/// Edit one cell (`sku`, `price` or `cost`) of a SKU row.
///
/// Price and cost go through numeric coercion; input that does not coerce
/// is declined and the row keeps its previous value. Recorded planning weeks
/// are not recomputed.
pub fn edit_sku_cell(ctx: &AppContext, row: &RowKey, field: &str, value: &str) -> Result<Option<SkuRow>> {
    execute_command("skus::edit_sku_cell", || {
        let Some(edit) = sku_edit(field, value) else {
            debug!(field, "sku cell edit declined");
            return Ok(None);
        };
        ctx.with_state(|state| edit_catalog_row(&mut state.skus, row, &edit))
    })
}

pub fn delete_sku_row(ctx: &AppContext, row: &RowKey) -> Result<bool> {
    execute_command("skus::delete_sku_row", || {
        ctx.with_state(|state| delete_catalog_row(&mut state.skus, &mut state.planning, row))
    })
}

fn sku_edit(field: &str, value: &str) -> Option<SkuEdit> {
    match field {
        "sku" => Some(SkuEdit::Sku(value.to_string())),
        "price" => coerce_number(value).map(SkuEdit::Price),
        "cost" => coerce_number(value).map(SkuEdit::Cost),
        _ => None,
    }
}
