//! Mock port implementations for testing
//!
//! Provides an in-memory key-value store and deterministic id generator so
//! services can be exercised without a storage backend.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use merchplan_core::{IdGenerator, KeyValueStore, Persistor};
use merchplan_domain::Result as DomainResult;
use parking_lot::Mutex;

/// In-memory mock for `KeyValueStore`.
#[derive(Default)]
pub struct MockKeyValueStore {
    values: Mutex<HashMap<String, String>>,
}

impl MockKeyValueStore {
    /// Create a mock pre-populated with raw values.
    pub fn with_values(values: &[(&str, &str)]) -> Self {
        let map = values.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
        Self { values: Mutex::new(map) }
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.values.lock().get(key).cloned()
    }

    pub fn json(&self, key: &str) -> serde_json::Value {
        self.raw(key)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or(serde_json::Value::Null)
    }
}

impl KeyValueStore for MockKeyValueStore {
    fn get(&self, key: &str) -> DomainResult<Option<String>> {
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> DomainResult<()> {
        self.values.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> DomainResult<()> {
        self.values.lock().remove(key);
        Ok(())
    }
}

/// Deterministic ids: `"{prefix}-1"`, `"{prefix}-2"`, ...
pub struct MockIdGenerator {
    prefix: &'static str,
    next: AtomicUsize,
}

impl MockIdGenerator {
    pub fn new(prefix: &'static str) -> Self {
        Self { prefix, next: AtomicUsize::new(1) }
    }
}

impl IdGenerator for MockIdGenerator {
    fn next_id(&self) -> String {
        format!("{}-{}", self.prefix, self.next.fetch_add(1, Ordering::SeqCst))
    }
}

/// Persistor over a fresh mock store, returning both.
pub fn persistor() -> (Arc<MockKeyValueStore>, Persistor) {
    let kv = Arc::new(MockKeyValueStore::default());
    (kv.clone(), Persistor::new(kv))
}
