//! Two-tier grid records
//!
//! Editable grids mix unsaved drafts with permanent records. Rather than one
//! struct whose identity field changes meaning, a row is either a `Draft` or a
//! `Saved` record, and the only way across is [`promote`].

use serde::{Deserialize, Serialize};

/// A draft row that may be promoted to a permanent record.
pub trait DraftRecord: Clone {
    /// The permanent record this draft becomes.
    type Saved;

    /// Transient identifier of the draft row.
    fn temp_id(&self) -> &str;

    /// Whether the required field is filled in.
    fn is_ready(&self) -> bool;

    /// Consume the draft, producing a permanent record with `id`.
    fn into_saved(self, id: String) -> Self::Saved;
}

/// A grid row: either an unsaved draft or a permanent record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "record", rename_all = "lowercase")]
pub enum GridRecord<S, D> {
    Draft(D),
    Saved(S),
}

impl<S, D> GridRecord<S, D> {
    pub const fn is_draft(&self) -> bool {
        matches!(self, Self::Draft(_))
    }
}

/// Result of attempting to promote a draft
#[derive(Debug, Clone, PartialEq)]
pub enum Promotion<S, D> {
    /// The draft became a permanent record.
    Saved(S),
    /// The required field is still blank; the draft stays a draft.
    Draft(D),
}

/// Promote `draft` when it is ready, minting its permanent id lazily.
pub fn promote<D, F>(draft: D, mint_id: F) -> Promotion<D::Saved, D>
where
    D: DraftRecord,
    F: FnOnce() -> String,
{
    if draft.is_ready() {
        Promotion::Saved(draft.into_saved(mint_id()))
    } else {
        Promotion::Draft(draft)
    }
}
