//! Record builders shared by integration tests

use merchplan_domain::{CalendarWeek, ForecastInput, Sku, Store};

pub fn store(id: &str, name: &str) -> Store {
    Store { id: id.into(), name: name.into(), city: "Atlanta".into(), state: "GA".into() }
}

pub fn sku(id: &str, price: f64, cost: f64) -> Sku {
    Sku { id: id.into(), sku: format!("SKU {id}"), price, cost }
}

pub fn weeks(ids: &[&str]) -> Vec<CalendarWeek> {
    ids.iter().map(|id| CalendarWeek::new(*id, format!("Week {id}"), "February")).collect()
}

/// Forecast for `sku` using its current price and cost.
pub fn forecast(store_id: &str, sku: &Sku, week_id: &str, sales_units: f64) -> ForecastInput {
    ForecastInput {
        store_id: store_id.into(),
        sku_id: sku.id.clone(),
        week_id: week_id.into(),
        sales_units,
        price: sku.price,
        cost: sku.cost,
    }
}
