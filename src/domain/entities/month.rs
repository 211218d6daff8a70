//! Calendar-month key used for cohort bucketing.

use chrono::{Datelike, NaiveDateTime};

/// A calendar month, e.g. `2024-03`.
///
/// Ordering is chronological, which is what the cohort axes rely on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    /// Builds a key from raw year/month parts. Months outside 1-12 are
    /// clamped into range.
    #[must_use]
    pub const fn new(year: i32, month: u32) -> Self {
        let month = if month == 0 {
            1
        } else if month > 12 {
            12
        } else {
            month
        };
        Self { year, month }
    }

    /// The month a timestamp falls into.
    #[must_use]
    pub fn from_datetime(value: &NaiveDateTime) -> Self {
        Self {
            year: value.year(),
            month: value.month(),
        }
    }

    /// Year component.
    #[must_use]
    pub const fn year(self) -> i32 {
        self.year
    }

    /// Month component (1-12).
    #[must_use]
    pub const fn month(self) -> u32 {
        self.month
    }
}

impl std::fmt::Display for MonthKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(year: i32, month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_display_is_zero_padded() {
        assert_eq!(MonthKey::new(2024, 3).to_string(), "2024-03");
        assert_eq!(MonthKey::new(2023, 11).to_string(), "2023-11");
    }

    #[test]
    fn test_ordering_is_chronological() {
        let dec = MonthKey::from_datetime(&at(2023, 12, 31));
        let jan = MonthKey::from_datetime(&at(2024, 1, 1));
        let feb = MonthKey::from_datetime(&at(2024, 2, 15));
        assert!(dec < jan);
        assert!(jan < feb);
    }

    #[test]
    fn test_out_of_range_months_are_clamped() {
        assert_eq!(MonthKey::new(2024, 0).month(), 1);
        assert_eq!(MonthKey::new(2024, 13).month(), 12);
    }
}
