#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use merchplan_core::{IdGenerator, KeyValueStore};
use merchplan_domain::{Config, PlanningConfig, SeedConfig};
use merchplan_infra::InMemoryKeyValueStore;
use merchplan_lib::AppContext;

/// Deterministic ids: `id-1`, `id-2`, ...
#[derive(Default)]
pub struct SequentialIds {
    next: AtomicUsize,
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> String {
        format!("id-{}", self.next.fetch_add(1, Ordering::SeqCst) + 1)
    }
}

/// Context plus a handle on its backing store for assertions.
pub struct TestApp {
    pub ctx: AppContext,
    pub store: Arc<InMemoryKeyValueStore>,
}

impl TestApp {
    /// Parsed JSON stored at `key`, or `Null` when absent.
    pub fn stored(&self, key: &str) -> serde_json::Value {
        self.store
            .get(key)
            .expect("in-memory read")
            .map(|raw| serde_json::from_str(&raw).expect("stored value is JSON"))
            .unwrap_or(serde_json::Value::Null)
    }

    /// A fresh context over the same backing store, as after a restart.
    pub fn reopen(&self, config: Config) -> AppContext {
        AppContext::with_store(config, self.store.clone(), Arc::new(SequentialIds::default()))
            .expect("context reopens")
    }
}

pub fn test_config(cascade_deletes: bool) -> Config {
    Config {
        planning: PlanningConfig { cascade_deletes },
        seeding: SeedConfig { enabled: false },
        ..Config::default()
    }
}

/// Build a context over an in-memory store pre-populated with `values`.
pub fn setup_app(config: Config, values: &[(&str, &str)]) -> TestApp {
    let store = Arc::new(InMemoryKeyValueStore::new());
    for (key, value) in values {
        store.set(key, value).expect("in-memory write");
    }
    let ctx = AppContext::with_store(config, store.clone(), Arc::new(SequentialIds::default()))
        .expect("context builds");
    TestApp { ctx, store }
}

/// One store `s1` and two SKUs `k1` (10 / 4) and `k2` (20 / 5).
pub fn catalog_fixture() -> [(&'static str, &'static str); 2] {
    [
        ("stores", r#"{"stores":[{"id":"s1","name":"Atlanta Outfitters","city":"Atlanta","state":"GA"}]}"#),
        (
            "skus",
            r#"[{"id":"k1","sku":"Cotton Polo Shirt","price":10.0,"cost":4.0},
                {"id":"k2","sku":"Tassel Fringe Handbag","price":20.0,"cost":5.0}]"#,
        ),
    ]
}
