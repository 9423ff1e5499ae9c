//! In-crate fakes for unit tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use merchplan_domain::{MerchPlanError, Result};
use parking_lot::Mutex;

use crate::storage::ports::{IdGenerator, KeyValueStore};

/// Map-backed key-value store with write-failure injection.
#[derive(Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
    fail_writes: AtomicBool,
    writes: AtomicUsize,
}

impl MemoryStore {
    pub fn raw(&self, key: &str) -> Option<String> {
        self.values.lock().get(key).cloned()
    }

    pub fn put(&self, key: &str, value: &str) {
        self.values.lock().insert(key.to_string(), value.to_string());
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(MerchPlanError::Storage(format!("write to {key} rejected")));
        }
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.put(key, value);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(MerchPlanError::Storage(format!("removal of {key} rejected")));
        }
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.values.lock().remove(key);
        Ok(())
    }
}

/// Deterministic ids: `"{prefix}-1"`, `"{prefix}-2"`, ...
pub struct SequentialIds {
    prefix: &'static str,
    next: AtomicUsize,
}

impl SequentialIds {
    pub const fn new(prefix: &'static str) -> Self {
        Self { prefix, next: AtomicUsize::new(1) }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> String {
        format!("{}-{}", self.prefix, self.next.fetch_add(1, Ordering::SeqCst))
    }
}
