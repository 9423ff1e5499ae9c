//! Catalog service - entity store, draft board and persistence for one kind

use std::sync::Arc;

use merchplan_domain::{EntityDeleted, GridRecord, Promotion, Result};
use tracing::{debug, info};

use super::drafts::DraftBoard;
use super::entity::Entity;
use super::records::EntityStore;
use crate::storage::{IdGenerator, PersistIntent, Persistor};

/// Reference to a grid row in either tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowRef<'a> {
    Saved(&'a str),
    Draft(&'a str),
}

/// What a row edit did
#[derive(Debug, Clone, PartialEq)]
pub enum RowEditOutcome<E: Entity> {
    /// A permanent record was updated in place.
    Updated,
    /// A draft was edited and stays a draft.
    DraftUpdated(E::Draft),
    /// A draft was promoted to this permanent record.
    Promoted(E),
    /// No row matched; nothing changed.
    NotFound,
}

/// Catalog service for one entity kind.
///
/// Every state change is persisted before the method returns.
pub struct CatalogService<E: Entity> {
    records: EntityStore<E>,
    drafts: DraftBoard<E>,
    persistor: Persistor,
    ids: Arc<dyn IdGenerator>,
}

impl<E: Entity> CatalogService<E> {
    /// Load records and drafts of this kind from storage.
    pub fn load(persistor: Persistor, ids: Arc<dyn IdGenerator>) -> Self {
        let records = persistor.load_records::<E>();
        let drafts = persistor.load_drafts::<E>();
        debug!(kind = %E::KIND, records = records.len(), drafts = drafts.len(), "catalog loaded");
        Self { records: EntityStore::new(records), drafts: DraftBoard::new(drafts), persistor, ids }
    }

    /// Permanent records, in insertion order.
    pub fn list(&self) -> &[E] {
        self.records.list()
    }

    pub fn get(&self, id: &str) -> Option<&E> {
        self.records.get(id)
    }

    pub fn drafts(&self) -> &[E::Draft] {
        self.drafts.drafts()
    }

    /// Grid rows: permanent records followed by drafts.
    pub fn rows(&self) -> Vec<GridRecord<E, E::Draft>> {
        self.records
            .list()
            .iter()
            .cloned()
            .map(GridRecord::Saved)
            .chain(self.drafts.drafts().iter().cloned().map(GridRecord::Draft))
            .collect()
    }

    /// Insert or overwrite a permanent record by id.
    pub fn upsert(&mut self, record: E) -> Result<()> {
        self.commit_records(|records| Some(records.upsert(record))).map(|_| ())
    }

    /// Replace every permanent record.
    pub fn replace_all(&mut self, records: Vec<E>) -> Result<()> {
        self.commit_records(|staged| Some(staged.replace_all(records))).map(|_| ())
    }

    /// Append an empty draft row.
    pub fn add_draft(&mut self) -> Result<E::Draft> {
        let mut drafts = self.drafts.clone();
        let (draft, intent) = drafts.add(self.ids.next_id());
        self.persistor.apply(&intent)?;
        self.drafts = drafts;
        Ok(draft)
    }

    /// Apply a field edit to a saved row or a draft row.
    pub fn edit_row(&mut self, row: RowRef<'_>, edit: &E::Edit) -> Result<RowEditOutcome<E>> {
        match row {
            RowRef::Saved(id) => self.edit_saved(id, edit),
            RowRef::Draft(temp_id) => self.edit_draft(temp_id, edit),
        }
    }

    fn edit_saved(&mut self, id: &str, edit: &E::Edit) -> Result<RowEditOutcome<E>> {
        let updated = self.commit_records(|records| records.update(id, edit))?;
        Ok(if updated { RowEditOutcome::Updated } else { RowEditOutcome::NotFound })
    }

    fn edit_draft(&mut self, temp_id: &str, edit: &E::Edit) -> Result<RowEditOutcome<E>> {
        let ids = Arc::clone(&self.ids);
        let mut drafts = self.drafts.clone();
        let Some(promotion) = drafts.edit(temp_id, edit, || ids.next_id()) else {
            return Ok(RowEditOutcome::NotFound);
        };

        match promotion {
            Promotion::Saved(record) => {
                // Records before drafts; a failed drafts write leaves the
                // row in both tiers.
                self.commit_records(|records| Some(records.upsert(record.clone())))?;
                self.persistor.apply(&drafts.snapshot())?;
                self.drafts = drafts;
                info!(kind = %E::KIND, id = record.id(), temp_id, "draft promoted");
                Ok(RowEditOutcome::Promoted(record))
            }
            Promotion::Draft(draft) => {
                self.persistor.apply(&drafts.snapshot())?;
                self.drafts = drafts;
                Ok(RowEditOutcome::DraftUpdated(draft))
            }
        }
    }

    /// Delete a row in either tier. Only permanent deletions produce an
    /// event.
    pub fn delete_row(&mut self, row: RowRef<'_>) -> Result<Option<EntityDeleted>> {
        match row {
            RowRef::Saved(id) => self.delete(id),
            RowRef::Draft(temp_id) => {
                let mut drafts = self.drafts.clone();
                if let Some(intent) = drafts.discard(temp_id) {
                    self.persistor.apply(&intent)?;
                    self.drafts = drafts;
                }
                Ok(None)
            }
        }
    }

    /// Delete a permanent record by id.
    pub fn delete(&mut self, id: &str) -> Result<Option<EntityDeleted>> {
        let mut event = None;
        self.commit_records(|records| {
            records.delete(id).map(|(intent, deleted)| {
                event = Some(deleted);
                intent
            })
        })?;
        if event.is_some() {
            info!(kind = %E::KIND, id, "record deleted");
        }
        Ok(event)
    }

    /// Run `transition` on a copy of the records and adopt the copy only
    /// once its intent is persisted. Returns whether anything changed.
    fn commit_records<F>(&mut self, transition: F) -> Result<bool>
    where
        F: FnOnce(&mut EntityStore<E>) -> Option<PersistIntent>,
    {
        let mut staged = self.records.clone();
        let Some(intent) = transition(&mut staged) else {
            return Ok(false);
        };
        self.persistor.apply(&intent)?;
        self.records = staged;
        Ok(true)
    }

    /// Record that demo data for this kind has been seeded.
    pub(crate) fn mark_seeded(&self) -> Result<()> {
        self.persistor.apply(&PersistIntent::MarkSeeded(E::KIND))
    }

    pub(crate) fn is_seeded(&self) -> bool {
        self.persistor.is_seeded(E::KIND)
    }

    pub(crate) fn ids(&self) -> &dyn IdGenerator {
        self.ids.as_ref()
    }
}
