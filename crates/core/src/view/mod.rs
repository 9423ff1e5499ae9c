//! Read-side projections over stores, SKUs, calendar and planning data

pub mod materialize;

pub use materialize::{gross_margin_series, materialize};
