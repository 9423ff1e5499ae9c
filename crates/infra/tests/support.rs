//! Shared fixtures for infra integration tests

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use merchplan_domain::{StorageBackend, StorageConfig};
use merchplan_infra::database::{DbManager, SqliteKeyValueStore};
use tempfile::TempDir;

/// Temporary database wrapper that keeps the underlying file alive for the
/// duration of a test run.
pub struct TestDatabase {
    pub manager: Arc<DbManager>,
    _temp_dir: TempDir,
}

impl TestDatabase {
    /// Create a new migrated temporary database.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("temp dir should be created");
        let manager =
            DbManager::new(temp_dir.path().join("test.db"), 2).expect("db manager should be created");
        manager.run_migrations().expect("migrations should run");
        Self { manager: Arc::new(manager), _temp_dir: temp_dir }
    }

    pub fn store(&self) -> SqliteKeyValueStore {
        SqliteKeyValueStore::new(self.manager.clone())
    }

    /// Count rows in `kv_store`.
    pub fn row_count(&self) -> i64 {
        let conn = self.manager.get_connection().expect("connection should be available");
        conn.query_row("SELECT COUNT(*) FROM kv_store", [], |row| row.get(0))
            .expect("count query should succeed")
    }
}

/// Storage config for `backend` rooted in `dir`.
pub fn storage_config(backend: StorageBackend, dir: &TempDir) -> StorageConfig {
    let path: PathBuf = match backend {
        StorageBackend::Sqlite => dir.path().join("merchplan.db"),
        _ => dir.path().join("data"),
    };
    StorageConfig { backend, path: Some(path.to_string_lossy().into_owned()), pool_size: 2 }
}
