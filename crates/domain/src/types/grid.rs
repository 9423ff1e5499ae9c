//! Materialized grid rows
//!
//! Dense projections of the sparse planning model. Nothing here is persisted.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::planning::WeekData;
use crate::utils::field_key::{FieldKey, WeekMetric};

/// One display row of the planning grid: a (store, SKU) pair with every
/// calendar week filled in
#[derive(Debug, Clone, PartialEq)]
pub struct PlanningRow {
    pub id: String,
    pub store_id: String,
    pub store_name: String,
    pub sku_id: String,
    pub sku_name: String,
    pub price: f64,
    pub cost: f64,
    /// One entry per calendar week, in calendar order.
    pub weeks: Vec<WeekData>,
}

impl PlanningRow {
    /// Look up a flattened week field such as `"W01_gmPercent"`.
    pub fn field(&self, key: &str) -> Option<f64> {
        let key = FieldKey::parse(key)?;
        self.weeks.iter().find(|week| week.week_id == key.week_id).map(|week| week.metric(key.metric))
    }

    /// The flattened `"<weekId>_<metric>"` fields, week by week.
    pub fn week_fields(&self) -> Vec<(String, f64)> {
        self.weeks
            .iter()
            .flat_map(|week| {
                WeekMetric::ALL.into_iter().map(move |metric| {
                    (FieldKey::new(week.week_id.clone(), metric).to_string(), week.metric(metric))
                })
            })
            .collect()
    }
}

impl Serialize for PlanningRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(7 + self.weeks.len() * WeekMetric::ALL.len()))?;
        map.serialize_entry("id", &self.id)?;
        map.serialize_entry("storeId", &self.store_id)?;
        map.serialize_entry("storeName", &self.store_name)?;
        map.serialize_entry("skuId", &self.sku_id)?;
        map.serialize_entry("skuName", &self.sku_name)?;
        map.serialize_entry("price", &self.price)?;
        map.serialize_entry("cost", &self.cost)?;
        for (key, value) in self.week_fields() {
            map.serialize_entry(&key, &value)?;
        }
        map.end()
    }
}

/// Weekly gross-margin aggregate across all rows of a materialization
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyMargin {
    pub week: String,
    pub sales_dollars: f64,
    pub gm_dollars: f64,
    pub gm_percent: f64,
}
