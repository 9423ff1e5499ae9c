//! Sparse planning data and its derivation engine

pub mod engine;
pub mod service;

pub use engine::derive_week;
pub use service::PlanningService;
