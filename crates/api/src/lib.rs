//! # MerchPlan API
//!
//! Application layer - context wiring and synchronous commands.
//!
//! This crate contains:
//! - Commands for the store, SKU and planning grids (UI to backend bridge)
//! - Application context (dependency injection)
//! - Logging setup and per-command timing
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture
//! - Serialises every command through one state lock

pub mod commands;
pub mod context;
pub mod utils;

// Re-export for convenience
pub use commands::*;
pub use context::*;
