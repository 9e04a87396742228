//! Inclusive date range for ledger queries
//!
//! A validated `[start, end]` window compared at day granularity. Both
//! bounds are included, matching the query contract.

use chrono::NaiveDate;

use super::record::{format_date, parse_date};
use crate::error::TallyError;

/// A closed date range, `start <= end` guaranteed at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Create a range, rejecting `start > end` with [`TallyError::InvalidRange`]
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, TallyError> {
        if start > end {
            return Err(TallyError::InvalidRange {
                start: format_date(start),
                end: format_date(end),
            });
        }
        Ok(Self { start, end })
    }

    /// Parse both bounds from canonical DD-MM-YYYY strings, then validate
    pub fn parse(start: &str, end: &str) -> Result<Self, TallyError> {
        Self::new(parse_date(start)?, parse_date(end)?)
    }

    /// The first day of the range
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// The last day of the range
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Check whether a date falls inside the range, bounds included
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of calendar days in the range, bounds included
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Iterate every calendar day in the range, in order
    pub fn iter_days(&self) -> impl Iterator<Item = NaiveDate> {
        self.start.iter_days().take(self.num_days() as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32, m: u32, y: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_rejects_inverted_range() {
        let err = DateRange::new(date(2, 1, 2024), date(1, 1, 2024)).unwrap_err();
        assert!(matches!(err, TallyError::InvalidRange { .. }));
        assert_eq!(
            err.to_string(),
            "Invalid range: start date 02-01-2024 is after end date 01-01-2024"
        );
    }

    #[test]
    fn test_parse() {
        let range = DateRange::parse("01-01-2024", "31-01-2024").unwrap();
        assert_eq!(range.start(), date(1, 1, 2024));
        assert_eq!(range.end(), date(31, 1, 2024));

        assert!(matches!(
            DateRange::parse("2024-01-01", "31-01-2024"),
            Err(TallyError::InvalidDate(_))
        ));
        assert!(DateRange::parse("31-01-2024", "01-01-2024").is_err());
    }

    #[test]
    fn test_contains_is_inclusive() {
        let range = DateRange::new(date(1, 1, 2024), date(31, 1, 2024)).unwrap();
        assert!(range.contains(date(1, 1, 2024)));
        assert!(range.contains(date(15, 1, 2024)));
        assert!(range.contains(date(31, 1, 2024)));
        assert!(!range.contains(date(31, 12, 2023)));
        assert!(!range.contains(date(1, 2, 2024)));
    }

    #[test]
    fn test_single_day_range() {
        let range = DateRange::new(date(5, 3, 2024), date(5, 3, 2024)).unwrap();
        assert_eq!(range.num_days(), 1);
        assert_eq!(range.iter_days().collect::<Vec<_>>(), vec![date(5, 3, 2024)]);
    }

    #[test]
    fn test_iter_days_covers_every_day() {
        let range = DateRange::new(date(1, 3, 2024), date(3, 3, 2024)).unwrap();
        assert_eq!(range.num_days(), 3);
        assert_eq!(
            range.iter_days().collect::<Vec<_>>(),
            vec![date(1, 3, 2024), date(2, 3, 2024), date(3, 3, 2024)]
        );
    }

    #[test]
    fn test_spans_month_boundary() {
        let range = DateRange::new(date(30, 1, 2024), date(2, 2, 2024)).unwrap();
        assert_eq!(range.num_days(), 4);
        let days: Vec<_> = range.iter_days().collect();
        assert_eq!(days[1], date(31, 1, 2024));
        assert_eq!(days[2], date(1, 2, 2024));
    }
}
