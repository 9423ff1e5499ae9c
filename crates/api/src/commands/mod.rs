//! Commands - UI to backend bridge
//!
//! Every command runs synchronously under the context lock. Declined input
//! (unknown fields, non-numeric cells, missing rows) returns `Ok` with an
//! empty or `false` result; only storage write failures surface as `Err`.

mod calendar;
mod chart;
mod planning;
mod skus;
mod stores;

pub use calendar::*;
pub use chart::*;
pub use planning::*;
pub use skus::*;
pub use stores::*;

use merchplan_core::{CatalogService, Entity, PlanningService, RowEditOutcome, RowRef};
use merchplan_domain::{DraftRecord, GridRecord, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Owned address of a catalog grid row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "id", rename_all = "lowercase")]
pub enum RowKey {
    Saved(String),
    Draft(String),
}

impl RowKey {
    pub fn as_row_ref(&self) -> RowRef<'_> {
        match self {
            Self::Saved(id) => RowRef::Saved(id),
            Self::Draft(temp_id) => RowRef::Draft(temp_id),
        }
    }
}

/// Apply `edit` and return the row as it now stands.
fn edit_catalog_row<E: Entity>(
    catalog: &mut CatalogService<E>,
    row: &RowKey,
    edit: &E::Edit,
) -> Result<Option<GridRecord<E, E::Draft>>> {
    let outcome = catalog.edit_row(row.as_row_ref(), edit)?;
    Ok(match outcome {
        RowEditOutcome::Updated => match row {
            RowKey::Saved(id) => catalog.get(id).cloned().map(GridRecord::Saved),
            RowKey::Draft(_) => None,
        },
        RowEditOutcome::DraftUpdated(draft) => Some(GridRecord::Draft(draft)),
        RowEditOutcome::Promoted(record) => Some(GridRecord::Saved(record)),
        RowEditOutcome::NotFound => {
            debug!(kind = %E::KIND, ?row, "edit target not found");
            None
        }
    })
}

/// Delete a row in either tier and let planning react to permanent
/// deletions. Returns whether a row was removed.
fn delete_catalog_row<E: Entity>(
    catalog: &mut CatalogService<E>,
    planning: &mut PlanningService,
    row: &RowKey,
) -> Result<bool> {
    let existed = match row {
        RowKey::Saved(id) => catalog.get(id).is_some(),
        RowKey::Draft(temp_id) => catalog.drafts().iter().any(|draft| draft.temp_id() == temp_id),
    };
    if let Some(event) = catalog.delete_row(row.as_row_ref())? {
        planning.handle_entity_deleted(&event)?;
    }
    Ok(existed)
}
