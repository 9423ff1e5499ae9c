//! Domain utilities

pub mod field_key;
