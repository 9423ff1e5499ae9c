//! Port interfaces for persisted state
//!
//! These traits define the boundaries between core business logic
//! and infrastructure implementations.

use merchplan_domain::Result;

/// Synchronous string key-value storage.
///
/// Each key is read and written independently; there is no transaction
/// spanning several keys, and the last write to a key wins.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored at `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` at `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

/// Source of fresh identifiers for catalog records and draft rows.
pub trait IdGenerator: Send + Sync {
    /// Return an identifier never handed out before.
    fn next_id(&self) -> String;
}
