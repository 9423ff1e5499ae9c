//! Key-value storage backends and backend selection

pub mod file;
pub mod memory;

use std::path::PathBuf;
use std::sync::Arc;

pub use file::JsonFileKeyValueStore;
use merchplan_core::KeyValueStore;
use merchplan_domain::{MerchPlanError, Result, StorageBackend, StorageConfig};
pub use memory::InMemoryKeyValueStore;
use tracing::info;

use crate::database::{DbManager, SqliteKeyValueStore};

/// Open the key-value store selected by `config`.
///
/// # Errors
/// Returns `MerchPlanError::Config` when a file or SQLite backend has no
/// path, and storage errors when the backend cannot be opened.
pub fn open_store(config: &StorageConfig) -> Result<Arc<dyn KeyValueStore>> {
    let store: Arc<dyn KeyValueStore> = match config.backend {
        StorageBackend::Memory => Arc::new(InMemoryKeyValueStore::new()),
        StorageBackend::File => Arc::new(JsonFileKeyValueStore::open(required_path(config)?)?),
        StorageBackend::Sqlite => {
            let manager = DbManager::new(required_path(config)?, config.pool_size)?;
            manager.run_migrations()?;
            manager.health_check()?;
            Arc::new(SqliteKeyValueStore::new(Arc::new(manager)))
        }
    };
    info!(backend = %config.backend, "storage backend ready");
    Ok(store)
}

fn required_path(config: &StorageConfig) -> Result<PathBuf> {
    config.path.as_deref().filter(|path| !path.trim().is_empty()).map(PathBuf::from).ok_or_else(|| {
        MerchPlanError::Config(format!("storage backend '{}' requires a path", config.backend))
    })
}
