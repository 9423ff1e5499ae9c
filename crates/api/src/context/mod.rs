//! Application context - dependency injection container

use std::sync::Arc;

use merchplan_core::{
    seed_if_needed, Calendar, CatalogService, IdGenerator, KeyValueStore, PlanningService,
    Persistor, UuidIdGenerator,
};
use merchplan_domain::{Config, Result, Sku, Store};
use merchplan_infra::{config as config_loader, open_store};
use parking_lot::Mutex;
use tracing::info;

/// Mutable planning state guarded by the context lock
pub struct PlanningState {
    pub stores: CatalogService<Store>,
    pub skus: CatalogService<Sku>,
    pub planning: PlanningService,
}

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: Config,
    calendar: Calendar,
    state: Mutex<PlanningState>,
}

impl AppContext {
    /// Load configuration from the environment or config files and open the
    /// configured storage backend.
    pub fn new() -> Result<Self> {
        let config = config_loader::load_or_default()?;
        Self::new_with_config(config)
    }

    /// Build a context from an explicit configuration.
    pub fn new_with_config(config: Config) -> Result<Self> {
        let store = open_store(&config.storage)?;
        Self::with_store(config, store, Arc::new(UuidIdGenerator))
    }

    /// Build a context over an already opened store.
    ///
    /// Loads every collection, then seeds demo data where needed.
    pub fn with_store(
        config: Config,
        store: Arc<dyn KeyValueStore>,
        ids: Arc<dyn IdGenerator>,
    ) -> Result<Self> {
        let calendar = Calendar::from_config(&config.calendar);
        let persistor = Persistor::new(store);

        let mut stores = CatalogService::load(persistor.clone(), Arc::clone(&ids));
        let mut skus = CatalogService::load(persistor.clone(), ids);
        let planning = PlanningService::load(persistor, &config.planning);

        let seeded = seed_if_needed(&config.seeding, &mut stores, &mut skus)?;

        info!(
            backend = %config.storage.backend,
            weeks = calendar.len(),
            stores = stores.list().len(),
            skus = skus.list().len(),
            planning_items = planning.collection().len(),
            seeded_stores = seeded.stores,
            seeded_skus = seeded.skus,
            cascade_deletes = planning.cascade_deletes(),
            "application context initialised"
        );

        Ok(Self { config, calendar, state: Mutex::new(PlanningState { stores, skus, planning }) })
    }

    pub fn calendar(&self) -> &Calendar {
        &self.calendar
    }

    /// Run `f` with exclusive access to the planning state.
    pub fn with_state<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut PlanningState) -> Result<T>,
    {
        let mut state = self.state.lock();
        f(&mut state)
    }
}
