//! Application constants
//!
//! Centralized location for storage keys, sentinel values and grid field
//! conventions shared by every layer.

// Persisted key-value storage keys
pub const STORES_KEY: &str = "stores";
pub const SKUS_KEY: &str = "skus";
pub const PLANNING_KEY: &str = "planning";
pub const STORE_DRAFTS_KEY: &str = "tempStores";
pub const SKU_DRAFTS_KEY: &str = "tempSkus";

// One-time seeding sentinels
pub const STORES_INITIALIZED_KEY: &str = "storesInitialized";
pub const SKUS_INITIALIZED_KEY: &str = "skusInitialized";
pub const SENTINEL_VALUE: &str = "true";

// Grid field keys are "<weekId>_<metric>"
pub const FIELD_KEY_SEPARATOR: char = '_';
pub const PLANNING_ID_SEPARATOR: char = '-';

// Default retail calendar
pub const WEEKS_PER_YEAR: usize = 52;
pub const DEFAULT_FISCAL_YEAR_START: &str = "2024-02-04";
/// Weeks per fiscal month in a 4-5-4 quarter.
pub const RETAIL_QUARTER_PATTERN: [usize; 3] = [4, 5, 4];

pub const PERCENT_SCALE: f64 = 100.0;
