//! # MerchPlan Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - Key-value storage backends (in-memory, JSON files, SQLite)
//! - Configuration loading from environment variables and files
//! - Conversions from third-party errors into domain errors
//!
//! ## Architecture
//! - Implements traits defined in `merchplan-core`
//! - Depends on `merchplan-domain` and `merchplan-core`
//! - Contains all "impure" code (filesystem, database)

pub mod config;
pub mod database;
pub mod errors;
pub mod storage;

// Re-export commonly used items
pub use database::{DbManager, SqliteKeyValueStore};
pub use errors::InfraError;
pub use storage::{open_store, InMemoryKeyValueStore, JsonFileKeyValueStore};
