//! Unsaved grid rows awaiting their required field

use merchplan_domain::{promote, DraftRecord, Promotion};

use super::entity::Entity;
use crate::storage::PersistIntent;

/// Insertion-ordered draft rows for one entity kind
#[derive(Debug, Clone)]
pub struct DraftBoard<E: Entity> {
    drafts: Vec<E::Draft>,
}

impl<E: Entity> Default for DraftBoard<E> {
    fn default() -> Self {
        Self { drafts: Vec::new() }
    }
}

impl<E: Entity> DraftBoard<E> {
    pub const fn new(drafts: Vec<E::Draft>) -> Self {
        Self { drafts }
    }

    pub fn drafts(&self) -> &[E::Draft] {
        &self.drafts
    }

    pub fn get(&self, temp_id: &str) -> Option<&E::Draft> {
        self.drafts.iter().find(|draft| draft.temp_id() == temp_id)
    }

    /// Append an empty draft row.
    pub fn add(&mut self, temp_id: String) -> (E::Draft, PersistIntent) {
        let draft = E::new_draft(temp_id);
        self.drafts.push(draft.clone());
        (draft, self.snapshot())
    }

    /// Apply `edit` to a copy of the draft and try to promote it.
    ///
    /// On promotion the draft leaves the board and the saved record is
    /// returned for the caller to append to its entity store. Otherwise the
    /// edited copy replaces the draft. Unknown `temp_id`s return `None`.
    pub fn edit<F>(&mut self, temp_id: &str, edit: &E::Edit, mint_id: F) -> Option<Promotion<E, E::Draft>>
    where
        F: FnOnce() -> String,
    {
        let index = self.drafts.iter().position(|draft| draft.temp_id() == temp_id)?;
        let mut edited = self.drafts[index].clone();
        E::apply_draft_edit(&mut edited, edit);

        let promotion = promote(edited, mint_id);
        match &promotion {
            Promotion::Saved(_) => {
                self.drafts.remove(index);
            }
            Promotion::Draft(draft) => self.drafts[index] = draft.clone(),
        }
        Some(promotion)
    }

    /// Drop a draft row without saving it.
    pub fn discard(&mut self, temp_id: &str) -> Option<PersistIntent> {
        let before = self.drafts.len();
        self.drafts.retain(|draft| draft.temp_id() != temp_id);
        (self.drafts.len() != before).then(|| self.snapshot())
    }

    pub fn snapshot(&self) -> PersistIntent {
        E::drafts_intent(self.drafts.clone())
    }
}
