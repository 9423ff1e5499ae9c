//! # MerchPlan Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Storage and identifier ports (traits)
//! - The store/SKU catalogs and their draft lifecycle
//! - The planning derivation engine and services
//! - The retail calendar and the materialized grid view
//!
//! ## Architecture Principles
//! - Only depends on `merchplan-domain`
//! - No database, filesystem or platform code
//! - Engines return persist intents; services apply them through ports
//! - Pure, testable business logic

pub mod calendar;
pub mod catalog;
pub mod planning;
pub mod seed;
pub mod storage;
pub mod view;

#[cfg(test)]
mod test_support;

pub use calendar::Calendar;
pub use catalog::{CatalogService, DraftBoard, Entity, EntityStore, RowEditOutcome, RowRef};
pub use planning::PlanningService;
pub use seed::{seed_if_needed, SeedReport};
pub use storage::{IdGenerator, KeyValueStore, PersistIntent, Persistor, UuidIdGenerator};
pub use view::{gross_margin_series, materialize};
