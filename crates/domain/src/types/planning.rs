//! Planning data model
//!
//! The planning collection is sparse: a `PlanningItem` exists only for
//! (store, SKU) pairs that have had at least one forecast entered, and its
//! `weeks_data` only holds weeks a user actually set.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::PLANNING_ID_SEPARATOR;
use crate::utils::field_key::WeekMetric;

/// One week's forecast input and its derived financials
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekData {
    pub week_id: String,
    pub sales_units: f64,
    pub sales_dollars: f64,
    pub gm_dollars: f64,
    pub gm_percent: f64,
}

impl WeekData {
    /// The implicit value of a week nobody has entered.
    pub fn zero(week_id: impl Into<String>) -> Self {
        Self {
            week_id: week_id.into(),
            sales_units: 0.0,
            sales_dollars: 0.0,
            gm_dollars: 0.0,
            gm_percent: 0.0,
        }
    }

    /// Read one metric by name.
    /// Whether every value is finite and therefore survives a JSON round trip.
    pub fn is_finite(&self) -> bool {
        WeekMetric::ALL.into_iter().all(|metric| self.metric(metric).is_finite())
    }

    pub const fn metric(&self, metric: WeekMetric) -> f64 {
        match metric {
            WeekMetric::SalesUnits => self.sales_units,
            WeekMetric::SalesDollars => self.sales_dollars,
            WeekMetric::GmDollars => self.gm_dollars,
            WeekMetric::GmPercent => self.gm_percent,
        }
    }
}

/// Sparse weekly plan for one (store, SKU) pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanningItem {
    pub id: String,
    pub store_id: String,
    pub sku_id: String,
    #[serde(default)]
    pub weeks_data: BTreeMap<String, WeekData>,
}

impl PlanningItem {
    /// An item with no recorded weeks.
    pub fn empty(store_id: &str, sku_id: &str) -> Self {
        Self {
            id: planning_id(store_id, sku_id),
            store_id: store_id.to_string(),
            sku_id: sku_id.to_string(),
            weeks_data: BTreeMap::new(),
        }
    }

    pub fn matches(&self, store_id: &str, sku_id: &str) -> bool {
        self.store_id == store_id && self.sku_id == sku_id
    }

    pub fn week(&self, week_id: &str) -> Option<&WeekData> {
        self.weeks_data.get(week_id)
    }
}

/// Row identity shared by planning items and materialized rows.
pub fn planning_id(store_id: &str, sku_id: &str) -> String {
    format!("{store_id}{PLANNING_ID_SEPARATOR}{sku_id}")
}

/// Insertion-ordered planning items, unique by (store, SKU)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlanningCollection {
    items: Vec<PlanningItem>,
}

impl PlanningCollection {
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Wrap items as-is. Callers are responsible for pair uniqueness and for
    /// derived fields being consistent.
    pub const fn from_items(items: Vec<PlanningItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[PlanningItem] {
        &self.items
    }

    pub fn into_items(self) -> Vec<PlanningItem> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PlanningItem> {
        self.items.iter()
    }

    pub fn find(&self, store_id: &str, sku_id: &str) -> Option<&PlanningItem> {
        self.items.iter().find(|item| item.matches(store_id, sku_id))
    }

    /// Mutable access to the pair's item, appending an empty one when absent.
    pub fn find_or_insert(&mut self, store_id: &str, sku_id: &str) -> &mut PlanningItem {
        let index = match self.items.iter().position(|item| item.matches(store_id, sku_id)) {
            Some(index) => index,
            None => {
                self.items.push(PlanningItem::empty(store_id, sku_id));
                self.items.len() - 1
            }
        };
        &mut self.items[index]
    }

    /// Remove every item matching `predicate`, returning how many went.
    pub fn remove_where<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&PlanningItem) -> bool,
    {
        let before = self.items.len();
        self.items.retain(|item| !predicate(item));
        before - self.items.len()
    }
}

impl<'a> IntoIterator for &'a PlanningCollection {
    type Item = &'a PlanningItem;
    type IntoIter = std::slice::Iter<'a, PlanningItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Persisted shape of the `planning` key
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanningEnvelope {
    #[serde(default)]
    pub planning_data: PlanningCollection,
}

/// Everything needed to derive one week of a forecast
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastInput {
    pub store_id: String,
    pub sku_id: String,
    pub week_id: String,
    pub sales_units: f64,
    pub price: f64,
    pub cost: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn planning_id_joins_with_hyphen() {
        assert_eq!(planning_id("s1", "k1"), "s1-k1");
        assert_eq!(PlanningItem::empty("s1", "k1").id, "s1-k1");
    }

    #[test]
    fn find_or_insert_appends_once() {
        let mut collection = PlanningCollection::new();
        collection.find_or_insert("s1", "k1");
        collection.find_or_insert("s2", "k1");
        collection.find_or_insert("s1", "k1");
        assert_eq!(collection.len(), 2);
        assert_eq!(collection.items()[0].id, "s1-k1");
        assert_eq!(collection.items()[1].id, "s2-k1");
    }

    #[test]
    fn envelope_uses_planning_data_key() {
        let mut collection = PlanningCollection::new();
        collection.find_or_insert("s1", "k1");
        let envelope = PlanningEnvelope { planning_data: collection };
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["planningData"][0]["storeId"], "s1");
        assert!(json["planningData"][0]["weeksData"].is_object());
    }

    #[test]
    fn envelope_without_planning_data_is_empty() {
        let envelope: PlanningEnvelope = serde_json::from_str("{}").unwrap();
        assert!(envelope.planning_data.is_empty());
    }
}
