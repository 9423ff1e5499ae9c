//! Calendar reference data

use serde::{Deserialize, Serialize};

/// One week of the planning calendar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarWeek {
    /// Unique week id, e.g. `"W01"`.
    pub week: String,
    pub week_label: String,
    pub month_label: String,
}

impl CalendarWeek {
    pub fn new(
        week: impl Into<String>,
        week_label: impl Into<String>,
        month_label: impl Into<String>,
    ) -> Self {
        Self { week: week.into(), week_label: week_label.into(), month_label: month_label.into() }
    }
}
