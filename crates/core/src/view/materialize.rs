//! Dense grid materialization
//!
//! The planning collection is sparse; the grid shows every live store × SKU
//! pair for every calendar week. Rows are rebuilt from scratch on each read
//! and never cached or persisted.

use std::collections::HashMap;

use merchplan_domain::constants::PERCENT_SCALE;
use merchplan_domain::{
    planning_id, CalendarWeek, PlanningCollection, PlanningItem, PlanningRow, Sku, Store,
    WeekData, WeeklyMargin,
};

/// Cross join stores (outer) and SKUs (inner) against the planning map.
///
/// Identity fields come from the current store and SKU records. Weeks with
/// no recorded forecast read as zeros. Items whose store or SKU no longer
/// exists are never visited.
pub fn materialize(
    stores: &[Store],
    skus: &[Sku],
    planning: &PlanningCollection,
    weeks: &[CalendarWeek],
) -> Vec<PlanningRow> {
    let mut index: HashMap<(&str, &str), &PlanningItem> = HashMap::with_capacity(planning.len());
    for item in planning {
        index.entry((item.store_id.as_str(), item.sku_id.as_str())).or_insert(item);
    }

    let mut rows = Vec::with_capacity(stores.len() * skus.len());
    for store in stores {
        for sku in skus {
            let item = index.get(&(store.id.as_str(), sku.id.as_str())).copied();
            let week_values = weeks
                .iter()
                .map(|week| {
                    item.and_then(|item| item.week(&week.week))
                        .cloned()
                        .unwrap_or_else(|| WeekData::zero(week.week.as_str()))
                })
                .collect();

            rows.push(PlanningRow {
                id: planning_id(&store.id, &sku.id),
                store_id: store.id.clone(),
                store_name: store.name.clone(),
                sku_id: sku.id.clone(),
                sku_name: sku.sku.clone(),
                price: sku.price,
                cost: sku.cost,
                weeks: week_values,
            });
        }
    }
    rows
}

/// Weekly totals across every row, in calendar order.
///
/// `gm_percent` uses the engine's rule: zero unless total sales are positive.
pub fn gross_margin_series(rows: &[PlanningRow], weeks: &[CalendarWeek]) -> Vec<WeeklyMargin> {
    weeks
        .iter()
        .enumerate()
        .map(|(position, week)| {
            let (sales_dollars, gm_dollars) = rows
                .iter()
                .filter_map(|row| {
                    row.weeks
                        .get(position)
                        .filter(|data| data.week_id == week.week)
                        .or_else(|| row.weeks.iter().find(|data| data.week_id == week.week))
                })
                .fold((0.0, 0.0), |(sales, gm), data| (sales + data.sales_dollars, gm + data.gm_dollars));

            let gm_percent =
                if sales_dollars > 0.0 { (gm_dollars / sales_dollars) * PERCENT_SCALE } else { 0.0 };

            WeeklyMargin { week: week.week.clone(), sales_dollars, gm_dollars, gm_percent }
        })
        .collect()
}
