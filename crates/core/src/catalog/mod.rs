//! Store and SKU catalogs with their draft rows

pub mod drafts;
pub mod entity;
pub mod records;
pub mod service;

pub use drafts::DraftBoard;
pub use entity::Entity;
pub use records::EntityStore;
pub use service::{CatalogService, RowEditOutcome, RowRef};
