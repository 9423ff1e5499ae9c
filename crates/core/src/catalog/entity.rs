//! The `Entity` abstraction shared by stores and SKUs

use merchplan_domain::constants::{SKUS_KEY, SKU_DRAFTS_KEY, STORES_KEY, STORE_DRAFTS_KEY};
use merchplan_domain::{
    DraftRecord, EntityKind, Sku, SkuDraft, SkuEdit, Store, StoreDraft, StoreEdit, StoresEnvelope,
};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::storage::PersistIntent;

/// A permanent catalog record kind with its draft row and edit types.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Unsaved grid row that promotes into `Self`.
    type Draft: DraftRecord<Saved = Self> + Serialize + DeserializeOwned + Send + Sync;
    /// Field-level edit applicable to both tiers.
    type Edit;
    /// Persisted wire shape of the record collection.
    type Stored: DeserializeOwned + Default;

    const KIND: EntityKind;
    const RECORDS_KEY: &'static str;
    const DRAFTS_KEY: &'static str;

    fn id(&self) -> &str;

    fn new_draft(temp_id: String) -> Self::Draft;

    fn apply_edit(&mut self, edit: &Self::Edit);

    fn apply_draft_edit(draft: &mut Self::Draft, edit: &Self::Edit);

    fn from_stored(stored: Self::Stored) -> Vec<Self>;

    fn records_intent(records: Vec<Self>) -> PersistIntent;

    fn drafts_intent(drafts: Vec<Self::Draft>) -> PersistIntent;
}

impl Entity for Store {
    type Draft = StoreDraft;
    type Edit = StoreEdit;
    type Stored = StoresEnvelope;

    const KIND: EntityKind = EntityKind::Store;
    const RECORDS_KEY: &'static str = STORES_KEY;
    const DRAFTS_KEY: &'static str = STORE_DRAFTS_KEY;

    fn id(&self) -> &str {
        &self.id
    }

    fn new_draft(temp_id: String) -> StoreDraft {
        StoreDraft::new(temp_id)
    }

    fn apply_edit(&mut self, edit: &StoreEdit) {
        edit.apply_to_store(self);
    }

    fn apply_draft_edit(draft: &mut StoreDraft, edit: &StoreEdit) {
        edit.apply_to_draft(draft);
    }

    fn from_stored(stored: StoresEnvelope) -> Vec<Self> {
        stored.stores
    }

    fn records_intent(records: Vec<Self>) -> PersistIntent {
        PersistIntent::Stores(records)
    }

    fn drafts_intent(drafts: Vec<StoreDraft>) -> PersistIntent {
        PersistIntent::StoreDrafts(drafts)
    }
}

impl Entity for Sku {
    type Draft = SkuDraft;
    type Edit = SkuEdit;
    type Stored = Vec<Sku>;

    const KIND: EntityKind = EntityKind::Sku;
    const RECORDS_KEY: &'static str = SKUS_KEY;
    const DRAFTS_KEY: &'static str = SKU_DRAFTS_KEY;

    fn id(&self) -> &str {
        &self.id
    }

    fn new_draft(temp_id: String) -> SkuDraft {
        SkuDraft::new(temp_id)
    }

    fn apply_edit(&mut self, edit: &SkuEdit) {
        edit.apply_to_sku(self);
    }

    fn apply_draft_edit(draft: &mut SkuDraft, edit: &SkuEdit) {
        edit.apply_to_draft(draft);
    }

    fn from_stored(stored: Vec<Sku>) -> Vec<Self> {
        stored
    }

    fn records_intent(records: Vec<Self>) -> PersistIntent {
        PersistIntent::Skus(records)
    }

    fn drafts_intent(drafts: Vec<SkuDraft>) -> PersistIntent {
        PersistIntent::SkuDrafts(drafts)
    }
}
