//! Catalog entities: stores and SKUs
//!
//! Both kinds exist in two tiers. A permanent record carries a stable `id`
//! and lives in the entity store; a draft carries a transient `tempId` and
//! lives on the draft board until its required field is filled in.

use serde::{Deserialize, Serialize};

use super::record::DraftRecord;
use crate::impl_domain_enum_conversions;

/// Permanent store record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
}

/// Permanent SKU record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sku {
    pub id: String,
    /// Display name of the SKU.
    pub sku: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub cost: f64,
}

/// Unsaved store row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreDraft {
    pub temp_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
}

impl StoreDraft {
    /// An empty draft row.
    pub fn new(temp_id: impl Into<String>) -> Self {
        Self { temp_id: temp_id.into(), name: String::new(), city: String::new(), state: String::new() }
    }
}

/// Unsaved SKU row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkuDraft {
    pub temp_id: String,
    #[serde(default)]
    pub sku: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub cost: f64,
}

impl SkuDraft {
    /// An empty draft row with zero price and cost.
    pub fn new(temp_id: impl Into<String>) -> Self {
        Self { temp_id: temp_id.into(), sku: String::new(), price: 0.0, cost: 0.0 }
    }
}

impl DraftRecord for StoreDraft {
    type Saved = Store;

    fn temp_id(&self) -> &str {
        &self.temp_id
    }

    fn is_ready(&self) -> bool {
        !self.name.trim().is_empty()
    }

    fn into_saved(self, id: String) -> Store {
        Store { id, name: self.name, city: self.city, state: self.state }
    }
}

impl DraftRecord for SkuDraft {
    type Saved = Sku;

    fn temp_id(&self) -> &str {
        &self.temp_id
    }

    fn is_ready(&self) -> bool {
        !self.sku.trim().is_empty()
    }

    fn into_saved(self, id: String) -> Sku {
        Sku { id, sku: self.sku, price: self.price, cost: self.cost }
    }
}

/// Which catalog collection a record belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Store,
    Sku,
}

impl_domain_enum_conversions!(EntityKind {
    Store => "store",
    Sku => "sku",
});

/// Emitted when a permanent catalog record is deleted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityDeleted {
    pub kind: EntityKind,
    pub id: String,
}

/// A single field-level edit on a store row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEdit {
    Name(String),
    City(String),
    State(String),
}

impl StoreEdit {
    /// Apply to a permanent record.
    pub fn apply_to_store(&self, store: &mut Store) {
        match self {
            Self::Name(value) => store.name.clone_from(value),
            Self::City(value) => store.city.clone_from(value),
            Self::State(value) => store.state.clone_from(value),
        }
    }

    /// Apply to a draft row.
    pub fn apply_to_draft(&self, draft: &mut StoreDraft) {
        match self {
            Self::Name(value) => draft.name.clone_from(value),
            Self::City(value) => draft.city.clone_from(value),
            Self::State(value) => draft.state.clone_from(value),
        }
    }
}

/// A single field-level edit on a SKU row
#[derive(Debug, Clone, PartialEq)]
pub enum SkuEdit {
    Sku(String),
    Price(f64),
    Cost(f64),
}

impl SkuEdit {
    /// Apply to a permanent record.
    pub fn apply_to_sku(&self, sku: &mut Sku) {
        match self {
            Self::Sku(value) => sku.sku.clone_from(value),
            Self::Price(value) => sku.price = *value,
            Self::Cost(value) => sku.cost = *value,
        }
    }

    /// Apply to a draft row.
    pub fn apply_to_draft(&self, draft: &mut SkuDraft) {
        match self {
            Self::Sku(value) => draft.sku.clone_from(value),
            Self::Price(value) => draft.price = *value,
            Self::Cost(value) => draft.cost = *value,
        }
    }
}

/// Persisted shape of the `stores` key
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoresEnvelope {
    #[serde(default)]
    pub stores: Vec<Store>,
}
