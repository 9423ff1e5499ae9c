//! Planning service - engine transitions persisted through the boundary

use merchplan_domain::{EntityDeleted, ForecastInput, PlanningCollection, PlanningConfig, Result};
use tracing::{debug, info};

use super::engine;
use crate::storage::{PersistIntent, Persistor};

/// Planning service
pub struct PlanningService {
    collection: PlanningCollection,
    persistor: Persistor,
    cascade_deletes: bool,
}

impl PlanningService {
    /// Load the planning collection from storage.
    pub fn load(persistor: Persistor, config: &PlanningConfig) -> Self {
        let collection = persistor.load_planning();
        debug!(items = collection.len(), "planning loaded");
        Self { collection, persistor, cascade_deletes: config.cascade_deletes }
    }

    pub fn collection(&self) -> &PlanningCollection {
        &self.collection
    }

    pub const fn cascade_deletes(&self) -> bool {
        self.cascade_deletes
    }

    /// Record a unit forecast. Returns whether the input was accepted.
    pub fn upsert_forecast(&mut self, input: &ForecastInput) -> Result<bool> {
        let accepted = self.commit(|collection| engine::upsert_forecast(collection, input))?;
        if !accepted {
            debug!(week = %input.week_id, units = input.sales_units, "forecast declined");
        }
        Ok(accepted)
    }

    /// Remove the item for (store, SKU). Returns whether one existed.
    pub fn delete_item(&mut self, store_id: &str, sku_id: &str) -> Result<bool> {
        self.commit(|collection| engine::delete_item(collection, store_id, sku_id))
    }

    pub fn replace_all(&mut self, replacement: PlanningCollection) -> Result<()> {
        self.commit(|collection| Some(engine::replace_all(collection, replacement))).map(|_| ())
    }

    /// React to a store or SKU deletion according to the cascade policy.
    ///
    /// Returns the number of items pruned; always zero with cascading off.
    pub fn handle_entity_deleted(&mut self, event: &EntityDeleted) -> Result<usize> {
        if !self.cascade_deletes {
            return Ok(0);
        }
        let before = self.collection.len();
        self.commit(|collection| engine::prune_for(collection, event))?;
        let pruned = before - self.collection.len();
        if pruned > 0 {
            info!(kind = %event.kind, id = %event.id, pruned, "pruned planning items");
        }
        Ok(pruned)
    }

    /// Run `transition` on a copy of the collection and adopt the copy only
    /// once its intent is persisted. Returns whether anything changed.
    fn commit<F>(&mut self, transition: F) -> Result<bool>
    where
        F: FnOnce(&mut PlanningCollection) -> Option<PersistIntent>,
    {
        let mut staged = self.collection.clone();
        let Some(intent) = transition(&mut staged) else {
            return Ok(false);
        };
        self.persistor.apply(&intent)?;
        self.collection = staged;
        Ok(true)
    }
}
