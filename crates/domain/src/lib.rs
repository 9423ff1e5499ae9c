//! # MerchPlan Domain
//!
//! Business domain types and models for MerchPlan.
//!
//! This crate contains:
//! - Catalog records (stores, SKUs) and their draft rows
//! - Planning data (week data, planning items, the planning collection)
//! - Materialized grid rows and chart aggregates
//! - Domain error types and Result definitions
//! - Configuration structures and constants
//!
//! ## Architecture
//! - No dependencies on other MerchPlan crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
pub use utils::field_key::{is_valid_week_id, FieldKey, WeekMetric};
