//! Planning derivation engine
//!
//! Owns every mutation of the sparse planning collection. Transitions are
//! pure: they update the collection in place and return the
//! [`PersistIntent`] for the new state, or `None` when nothing changed.

use merchplan_domain::constants::PERCENT_SCALE;
use merchplan_domain::{
    is_valid_week_id, EntityDeleted, EntityKind, ForecastInput, PlanningCollection, WeekData,
};

use crate::storage::PersistIntent;

/// Derive one week's metrics from the entered units and the SKU's economics.
///
/// `gm_percent` is zero whenever sales dollars are not positive.
pub fn derive_week(week_id: &str, sales_units: f64, price: f64, cost: f64) -> WeekData {
    let sales_dollars = sales_units * price;
    let gm_dollars = sales_dollars - sales_units * cost;
    let gm_percent =
        if sales_dollars > 0.0 { (gm_dollars / sales_dollars) * PERCENT_SCALE } else { 0.0 };

    WeekData { week_id: week_id.to_string(), sales_units, sales_dollars, gm_dollars, gm_percent }
}

/// Record a unit forecast for one (store, SKU, week).
///
/// Non-finite units, structurally invalid week ids and inputs whose derived
/// values overflow are declined. The item for the pair is created on first
/// use and appended; the week entry is overwritten, so repeating the same
/// input is idempotent.
pub fn upsert_forecast(
    collection: &mut PlanningCollection,
    input: &ForecastInput,
) -> Option<PersistIntent> {
    if !input.sales_units.is_finite() || !is_valid_week_id(&input.week_id) {
        return None;
    }

    let week = derive_week(&input.week_id, input.sales_units, input.price, input.cost);
    if !week.is_finite() {
        return None;
    }
    let item = collection.find_or_insert(&input.store_id, &input.sku_id);
    item.weeks_data.insert(input.week_id.clone(), week);

    Some(PersistIntent::Planning(collection.clone()))
}

/// Remove the item for (store, SKU) entirely.
pub fn delete_item(
    collection: &mut PlanningCollection,
    store_id: &str,
    sku_id: &str,
) -> Option<PersistIntent> {
    let removed = collection.remove_where(|item| item.matches(store_id, sku_id));
    (removed > 0).then(|| PersistIntent::Planning(collection.clone()))
}

/// Bulk-replace the collection without recomputing derived fields.
pub fn replace_all(collection: &mut PlanningCollection, replacement: PlanningCollection) -> PersistIntent {
    *collection = replacement;
    PersistIntent::Planning(collection.clone())
}

/// Drop every item referencing a deleted store or SKU.
pub fn prune_for(collection: &mut PlanningCollection, event: &EntityDeleted) -> Option<PersistIntent> {
    let removed = collection.remove_where(|item| match event.kind {
        EntityKind::Store => item.store_id == event.id,
        EntityKind::Sku => item.sku_id == event.id,
    });
    (removed > 0).then(|| PersistIntent::Planning(collection.clone()))
}
