//! Persistence boundary
//!
//! Engines never touch storage. Every mutation returns a [`PersistIntent`]
//! describing the full value one key should hold afterwards, and the
//! [`Persistor`] turns intents into key-value writes using the persisted
//! wire formats:
//!
//! | key                 | value                              |
//! |---------------------|------------------------------------|
//! | `stores`            | `{"stores": [Store, ...]}`         |
//! | `skus`              | `[Sku, ...]` (bare array)          |
//! | `planning`          | `{"planningData": [Item, ...]}`    |
//! | `tempStores`        | `[StoreDraft, ...]`, absent if none |
//! | `tempSkus`          | `[SkuDraft, ...]`, absent if none   |
//! | `*Initialized`      | `true` (raw sentinel string)       |

use std::sync::Arc;

use merchplan_domain::constants::{
    PLANNING_KEY, SENTINEL_VALUE, SKUS_INITIALIZED_KEY, SKUS_KEY, SKU_DRAFTS_KEY,
    STORES_INITIALIZED_KEY, STORES_KEY, STORE_DRAFTS_KEY,
};
use merchplan_domain::{
    EntityKind, PlanningCollection, PlanningItem, Result, Sku, SkuDraft, Store, StoreDraft,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

use super::ports::KeyValueStore;
use crate::catalog::Entity;

/// Description of one key write
#[derive(Debug, Clone, PartialEq)]
pub enum PersistIntent {
    Stores(Vec<Store>),
    Skus(Vec<Sku>),
    StoreDrafts(Vec<StoreDraft>),
    SkuDrafts(Vec<SkuDraft>),
    Planning(PlanningCollection),
    /// Record that demo data for this kind has been seeded.
    MarkSeeded(EntityKind),
}

#[derive(Serialize)]
struct StoresOut<'a> {
    stores: &'a [Store],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PlanningOut<'a> {
    planning_data: &'a PlanningCollection,
}

/// Planning envelope with items left undecoded, so a malformed item can be
/// skipped without losing its neighbours.
#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlanningIn {
    #[serde(default)]
    planning_data: Vec<serde_json::Value>,
}

impl PersistIntent {
    /// Storage key this intent writes.
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Stores(_) => STORES_KEY,
            Self::Skus(_) => SKUS_KEY,
            Self::StoreDrafts(_) => STORE_DRAFTS_KEY,
            Self::SkuDrafts(_) => SKU_DRAFTS_KEY,
            Self::Planning(_) => PLANNING_KEY,
            Self::MarkSeeded(kind) => sentinel_key(*kind),
        }
    }

    /// Whether applying this intent removes its key instead of writing it.
    pub fn clears_key(&self) -> bool {
        match self {
            Self::StoreDrafts(drafts) => drafts.is_empty(),
            Self::SkuDrafts(drafts) => drafts.is_empty(),
            _ => false,
        }
    }

    /// Encode the value in its persisted wire format.
    pub fn encode(&self) -> Result<String> {
        let encoded = match self {
            Self::Stores(stores) => serde_json::to_string(&StoresOut { stores })?,
            Self::Skus(skus) => serde_json::to_string(skus)?,
            Self::StoreDrafts(drafts) => serde_json::to_string(drafts)?,
            Self::SkuDrafts(drafts) => serde_json::to_string(drafts)?,
            Self::Planning(planning) => {
                serde_json::to_string(&PlanningOut { planning_data: planning })?
            }
            Self::MarkSeeded(_) => SENTINEL_VALUE.to_string(),
        };
        Ok(encoded)
    }
}

/// Sentinel key guarding one-time seeding of `kind`.
pub const fn sentinel_key(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Store => STORES_INITIALIZED_KEY,
        EntityKind::Sku => SKUS_INITIALIZED_KEY,
    }
}

/// Applies persist intents to a key-value store and decodes persisted state
#[derive(Clone)]
pub struct Persistor {
    store: Arc<dyn KeyValueStore>,
}

impl Persistor {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Write the value described by `intent`, or remove its key when the
    /// intent describes an empty draft board.
    pub fn apply(&self, intent: &PersistIntent) -> Result<()> {
        let key = intent.key();
        if intent.clears_key() {
            self.store.remove(key)?;
            debug!(key, "cleared");
            return Ok(());
        }
        let value = intent.encode()?;
        self.store.set(key, &value)?;
        debug!(key, bytes = value.len(), "persisted");
        Ok(())
    }

    /// Write every intent in order, stopping at the first failure.
    pub fn apply_all<'a, I>(&self, intents: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a PersistIntent>,
    {
        intents.into_iter().try_for_each(|intent| self.apply(intent))
    }

    /// Decode the value at `key`, falling back to `T::default()` when the key
    /// is absent, unreadable or malformed. Load failures are logged and never
    /// surfaced.
    pub fn load_or_default<T>(&self, key: &str) -> T
    where
        T: DeserializeOwned + Default,
    {
        match self.store.get(key) {
            Ok(None) => T::default(),
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|err| {
                warn!(key, error = %err, "malformed persisted value; starting empty");
                T::default()
            }),
            Err(err) => {
                error!(key, error = %err, "failed to read persisted value; starting empty");
                T::default()
            }
        }
    }

    /// Permanent records of entity kind `E`.
    pub fn load_records<E: Entity>(&self) -> Vec<E> {
        E::from_stored(self.load_or_default::<E::Stored>(E::RECORDS_KEY))
    }

    /// Draft rows of entity kind `E`.
    pub fn load_drafts<E: Entity>(&self) -> Vec<E::Draft> {
        self.load_or_default::<Vec<E::Draft>>(E::DRAFTS_KEY)
    }

    /// Planning items, decoded one by one. Malformed items are logged and
    /// skipped.
    pub fn load_planning(&self) -> PlanningCollection {
        let stored = self.load_or_default::<PlanningIn>(PLANNING_KEY);
        let items: Vec<PlanningItem> = stored
            .planning_data
            .into_iter()
            .enumerate()
            .filter_map(|(index, value)| match serde_json::from_value(value) {
                Ok(item) => Some(item),
                Err(err) => {
                    warn!(key = PLANNING_KEY, index, error = %err, "skipping malformed planning item");
                    None
                }
            })
            .collect();
        PlanningCollection::from_items(items)
    }

    /// Whether the seeding sentinel for `kind` is present.
    pub fn is_seeded(&self, kind: EntityKind) -> bool {
        match self.store.get(sentinel_key(kind)) {
            Ok(value) => value.is_some_and(|value| !value.is_empty()),
            Err(err) => {
                error!(kind = %kind, error = %err, "failed to read seeding sentinel");
                false
            }
        }
    }
}
