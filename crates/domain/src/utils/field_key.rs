//! Grid field keys
//!
//! The dense planning grid addresses week columns as `"<weekId>_<metric>"`,
//! e.g. `"W07_salesUnits"`. Week ids therefore may not contain the separator.

use std::fmt;

use crate::constants::FIELD_KEY_SEPARATOR;
use crate::impl_domain_enum_conversions;

/// The four per-week values of a planning row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeekMetric {
    SalesUnits,
    SalesDollars,
    GmDollars,
    GmPercent,
}

impl_domain_enum_conversions!(WeekMetric {
    SalesUnits => "salesUnits",
    SalesDollars => "salesDollars",
    GmDollars => "gmDollars",
    GmPercent => "gmPercent",
});

impl WeekMetric {
    /// Column order within one week group.
    pub const ALL: [Self; 4] = [Self::SalesUnits, Self::SalesDollars, Self::GmDollars, Self::GmPercent];

    /// Only the forecast input can be edited; the rest are derived.
    pub const fn is_editable(self) -> bool {
        matches!(self, Self::SalesUnits)
    }
}

/// A parsed week column key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldKey {
    pub week_id: String,
    pub metric: WeekMetric,
}

impl FieldKey {
    pub fn new(week_id: impl Into<String>, metric: WeekMetric) -> Self {
        Self { week_id: week_id.into(), metric }
    }

    /// Parse `"<weekId>_<metric>"`. Returns `None` for identity columns such
    /// as `"storeName"` and for malformed keys.
    pub fn parse(key: &str) -> Option<Self> {
        let (week_id, metric) = key.split_once(FIELD_KEY_SEPARATOR)?;
        if !is_valid_week_id(week_id) {
            return None;
        }
        let metric = metric.parse::<WeekMetric>().ok()?;
        Some(Self { week_id: week_id.to_string(), metric })
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.week_id, FIELD_KEY_SEPARATOR, self.metric)
    }
}

/// Structural check for week identifiers: non-empty ASCII alphanumeric.
pub fn is_valid_week_id(week_id: &str) -> bool {
    !week_id.is_empty() && week_id.bytes().all(|b| b.is_ascii_alphanumeric())
}
