//! Displayed month model and Gregorian day arithmetic.

use chrono::{Datelike, NaiveDate};

/// Day counts per month; first row for common years, second for leap years.
const DAYS_OF_MONTH: [[u8; 12]; 2] = [
    [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31],
    [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31],
];

/// Gregorian leap-year rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// A validated year/month pair identifying which month's grid is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayedMonth {
    year: i32,
    month: u32,
}

impl DisplayedMonth {
    /// Create a displayed month.
    ///
    /// Returns `None` when `month` is outside 1-12 or the year is outside
    /// the range representable as a calendar date.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1)?;
        Some(Self { year, month })
    }

    /// The month containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Legal values: 1-12.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Number of days in this month.
    pub fn days_in_month(&self) -> u32 {
        u32::from(DAYS_OF_MONTH[usize::from(is_leap_year(self.year))][(self.month - 1) as usize])
    }

    /// First day of this month as a calendar date.
    pub fn first_day(&self) -> NaiveDate {
        // Validity is guaranteed by the constructor.
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap()
    }

    /// Grid column of day 1 under the Monday-start convention
    /// (Monday = 0 ... Sunday = 6).
    pub fn first_weekday_column(&self) -> usize {
        self.first_day().weekday().num_days_from_monday() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(2000, true; "divisible by 400")]
    #[test_case(2004, true; "divisible by 4")]
    #[test_case(2096, true; "late century leap")]
    #[test_case(1900, false; "century non leap")]
    #[test_case(2100, false; "next century non leap")]
    #[test_case(2001, false; "plain non leap")]
    fn test_leap_year_rule(year: i32, expected: bool) {
        assert_eq!(is_leap_year(year), expected);
    }

    #[test]
    fn test_february_day_count_follows_leap_rule() {
        assert_eq!(DisplayedMonth::new(2024, 2).unwrap().days_in_month(), 29);
        assert_eq!(DisplayedMonth::new(2023, 2).unwrap().days_in_month(), 28);
        assert_eq!(DisplayedMonth::new(1900, 2).unwrap().days_in_month(), 28);
        assert_eq!(DisplayedMonth::new(2000, 2).unwrap().days_in_month(), 29);
    }

    #[test]
    fn test_day_counts_for_common_year() {
        let expected = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for (month, days) in (1..=12).zip(expected) {
            assert_eq!(DisplayedMonth::new(2023, month).unwrap().days_in_month(), days);
        }
    }

    #[test]
    fn test_new_rejects_out_of_range_month() {
        assert!(DisplayedMonth::new(2024, 0).is_none());
        assert!(DisplayedMonth::new(2024, 13).is_none());
    }

    #[test]
    fn test_first_weekday_column_monday_start() {
        // Feb 2024 starts on a Thursday
        assert_eq!(DisplayedMonth::new(2024, 2).unwrap().first_weekday_column(), 3);
        // Sep 2024 starts on a Sunday, which is the last column
        assert_eq!(DisplayedMonth::new(2024, 9).unwrap().first_weekday_column(), 6);
        // Jul 2024 starts on a Monday
        assert_eq!(DisplayedMonth::new(2024, 7).unwrap().first_weekday_column(), 0);
    }

    #[test]
    fn test_containing_uses_date_month() {
        let date = NaiveDate::from_ymd_opt(2025, 8, 6).unwrap();
        let month = DisplayedMonth::containing(date);
        assert_eq!(month.year(), 2025);
        assert_eq!(month.month(), 8);
    }
}
