//! SQLite-backed implementation of the `KeyValueStore` port.

use std::sync::Arc;

use merchplan_core::KeyValueStore;
use merchplan_domain::Result;
use rusqlite::{params, OptionalExtension};
use tracing::debug;

use super::manager::{map_sql_error, DbManager};

const KV_GET_SQL: &str = "SELECT value FROM kv_store WHERE key = ?1";
const KV_SET_SQL: &str = "INSERT INTO kv_store (key, value, updated_at) \
     VALUES (?1, ?2, CAST(strftime('%s','now') AS INTEGER)) \
     ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";
const KV_REMOVE_SQL: &str = "DELETE FROM kv_store WHERE key = ?1";

/// Key-value store persisting into the `kv_store` table.
pub struct SqliteKeyValueStore {
    db: Arc<DbManager>,
}

impl SqliteKeyValueStore {
    /// Create a store over a manager whose migrations have run.
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

impl KeyValueStore for SqliteKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let conn = self.db.get_connection()?;
        conn.query_row(KV_GET_SQL, params![key], |row| row.get::<_, String>(0))
            .optional()
            .map_err(map_sql_error)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let conn = self.db.get_connection()?;
        conn.execute(KV_SET_SQL, params![key, value]).map_err(map_sql_error)?;
        debug!(key, bytes = value.len(), "kv_store upsert");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let conn = self.db.get_connection()?;
        conn.execute(KV_REMOVE_SQL, params![key]).map_err(map_sql_error)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn store() -> (TempDir, SqliteKeyValueStore) {
        let temp_dir = TempDir::new().expect("temp dir created");
        let manager = DbManager::new(temp_dir.path().join("kv.db"), 2).expect("manager created");
        manager.run_migrations().expect("migrations run");
        (temp_dir, SqliteKeyValueStore::new(Arc::new(manager)))
    }

    #[test]
    fn upsert_overwrites_value() {
        let (_dir, store) = store();
        assert_eq!(store.get("planning").unwrap(), None);

        store.set("planning", "{\"planningData\":[]}").unwrap();
        store.set("planning", "{\"planningData\":[1]}").unwrap();
        assert_eq!(store.get("planning").unwrap().as_deref(), Some("{\"planningData\":[1]}"));
    }

    #[test]
    fn remove_deletes_row() {
        let (_dir, store) = store();
        store.set("skusInitialized", "true").unwrap();
        store.remove("skusInitialized").unwrap();
        store.remove("skusInitialized").unwrap();
        assert_eq!(store.get("skusInitialized").unwrap(), None);
    }
}
