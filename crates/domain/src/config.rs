//! Configuration management

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_FISCAL_YEAR_START;
use crate::impl_domain_enum_conversions;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub calendar: CalendarConfig,
    #[serde(default)]
    pub planning: PlanningConfig,
    #[serde(default)]
    pub seeding: SeedConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Which key-value backend holds persisted state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Process-local map, lost on exit
    #[default]
    Memory,
    /// One JSON file per key under `StorageConfig::path`
    File,
    /// `kv_store` table in the SQLite database at `StorageConfig::path`
    Sqlite,
}

impl_domain_enum_conversions!(StorageBackend {
    Memory => "memory",
    File => "file",
    Sqlite => "sqlite",
});

/// Storage configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,
    /// Directory (file backend) or database file (sqlite backend).
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default = "default_pool_size")]
    pub pool_size: u32,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { backend: StorageBackend::Memory, path: None, pool_size: default_pool_size() }
    }
}

const fn default_pool_size() -> u32 {
    4
}

/// Fiscal calendar configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarConfig {
    /// First day of week `W01`.
    #[serde(default = "default_fiscal_year_start")]
    pub fiscal_year_start: NaiveDate,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self { fiscal_year_start: default_fiscal_year_start() }
    }
}

fn default_fiscal_year_start() -> NaiveDate {
    DEFAULT_FISCAL_YEAR_START.parse().unwrap_or(NaiveDate::MIN)
}

/// Planning behaviour configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlanningConfig {
    /// Prune planning items when their store or SKU is deleted.
    #[serde(default)]
    pub cascade_deletes: bool,
}

/// Demo data seeding configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

const fn default_true() -> bool {
    true
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive, e.g. `"info"` or
    /// `"merchplan_core=debug"`.
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), json: false }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
