//! Store grid commands

use merchplan_domain::{GridRecord, Result, Store, StoreDraft, StoreEdit};
use tracing::debug;

use super::{delete_catalog_row, edit_catalog_row, RowKey};
use crate::utils::command_helpers::execute_command;
use crate::AppContext;

pub type StoreRow = GridRecord<Store, StoreDraft>;

/// Saved stores followed by draft rows.
pub fn list_store_rows(ctx: &AppContext) -> Result<Vec<StoreRow>> {
    execute_command("stores::list_store_rows", || ctx.with_state(|state| Ok(state.stores.rows())))
}

/// Append an empty draft row.
pub fn add_store_row(ctx: &AppContext) -> Result<StoreDraft> {
    execute_command("stores::add_store_row", || ctx.with_state(|state| state.stores.add_draft()))
}

/// Edit one cell (`name`, `city` or `state`) of a store row.
///
/// Returns the updated row, or `None` when the field is unknown or the row
/// does not exist. A draft whose name becomes non-blank is returned saved.
pub fn edit_store_cell(ctx: &AppContext, row: &RowKey, field: &str, value: &str) -> Result<Option<StoreRow>> {
    execute_command("stores::edit_store_cell", || {
        let Some(edit) = store_edit(field, value) else {
            debug!(field, "unknown store field");
            return Ok(None);
        };
        ctx.with_state(|state| edit_catalog_row(&mut state.stores, row, &edit))
    })
}

pub fn delete_store_row(ctx: &AppContext, row: &RowKey) -> Result<bool> {
    execute_command("stores::delete_store_row", || {
        ctx.with_state(|state| delete_catalog_row(&mut state.stores, &mut state.planning, row))
    })
}

fn store_edit(field: &str, value: &str) -> Option<StoreEdit> {
    let value = value.to_string();
    match field {
        "name" => Some(StoreEdit::Name(value)),
        "city" => Some(StoreEdit::City(value)),
        "state" => Some(StoreEdit::State(value)),
        _ => None,
    }
}
