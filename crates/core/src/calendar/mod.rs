//! Retail planning calendar
//!
//! The calendar is read-only reference data: an ordered list of weeks that
//! defines the columns of the planning grid and the universe of week ids a
//! forecast may be entered for.

use std::collections::HashSet;

use chrono::{Duration, NaiveDate};
use merchplan_domain::constants::{RETAIL_QUARTER_PATTERN, WEEKS_PER_YEAR};
use merchplan_domain::{is_valid_week_id, CalendarConfig, CalendarWeek, MerchPlanError, Result};

/// Ordered, duplicate-free list of planning weeks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calendar {
    weeks: Vec<CalendarWeek>,
}

impl Calendar {
    /// Build a calendar from explicit weeks.
    ///
    /// Fails when a week id is not a valid grid identifier or appears twice.
    pub fn from_weeks(weeks: Vec<CalendarWeek>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(weeks.len());
        for week in &weeks {
            if !is_valid_week_id(&week.week) {
                return Err(MerchPlanError::InvalidInput(format!("invalid week id: {:?}", week.week)));
            }
            if !seen.insert(week.week.as_str()) {
                return Err(MerchPlanError::InvalidInput(format!("duplicate week id: {}", week.week)));
            }
        }
        Ok(Self { weeks })
    }

    /// 52-week retail year on the 4-5-4 pattern starting at `start`.
    ///
    /// Each fiscal month takes its label from the calendar month in which its
    /// first week starts.
    pub fn retail_454(start: NaiveDate) -> Self {
        let mut weeks = Vec::with_capacity(WEEKS_PER_YEAR);
        let mut month_label = String::new();
        let mut period_lengths = RETAIL_QUARTER_PATTERN.iter().copied().cycle();
        let mut remaining_in_period = 0;

        for index in 0..WEEKS_PER_YEAR {
            let number = index + 1;
            let week_start = start + Duration::weeks(index as i64);

            if remaining_in_period == 0 {
                remaining_in_period = period_lengths.next().unwrap_or(4);
                month_label = week_start.format("%B").to_string();
            }
            remaining_in_period -= 1;

            weeks.push(CalendarWeek::new(
                format!("W{number:02}"),
                format!("Week {number} ({})", week_start.format("%b %-d")),
                month_label.clone(),
            ));
        }

        Self { weeks }
    }

    pub fn from_config(config: &CalendarConfig) -> Self {
        Self::retail_454(config.fiscal_year_start)
    }

    pub fn weeks(&self) -> &[CalendarWeek] {
        &self.weeks
    }

    pub fn len(&self) -> usize {
        self.weeks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    /// Whether `week_id` is one of this calendar's weeks.
    pub fn contains(&self, week_id: &str) -> bool {
        self.weeks.iter().any(|week| week.week == week_id)
    }
}

impl Default for Calendar {
    fn default() -> Self {
        Self::from_config(&CalendarConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_calendar_has_52_ordered_weeks() {
        let calendar = Calendar::default();
        assert_eq!(calendar.len(), 52);
        assert_eq!(calendar.weeks()[0].week, "W01");
        assert_eq!(calendar.weeks()[0].week_label, "Week 1 (Feb 4)");
        assert_eq!(calendar.weeks()[51].week, "W52");
        assert!(calendar.contains("W52"));
        assert!(!calendar.contains("W53"));
    }

    #[test]
    fn month_labels_follow_454_pattern() {
        let calendar = Calendar::default();
        let label = |n: usize| calendar.weeks()[n - 1].month_label.as_str();

        assert_eq!(label(1), "February");
        assert_eq!(label(4), "February");
        // Second period is five weeks long, starting Mar 3.
        assert_eq!(label(5), "March");
        assert_eq!(label(9), "March");
        assert_eq!(label(10), "April");
        assert_eq!(label(14), "May");
    }

    #[test]
    fn explicit_weeks_reject_duplicates_and_separators() {
        let week = |id: &str| CalendarWeek::new(id, id, "January");

        let calendar = Calendar::from_weeks(vec![week("W01"), week("W02")]).unwrap();
        assert_eq!(calendar.len(), 2);

        assert!(Calendar::from_weeks(vec![week("W01"), week("W01")]).is_err());
        assert!(Calendar::from_weeks(vec![week("W_1")]).is_err());
        assert!(Calendar::from_weeks(vec![week("")]).is_err());
    }
}
