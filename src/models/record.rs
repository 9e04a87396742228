//! Transaction record model
//!
//! Represents one row of the ledger file. Records are append-only: they have
//! no identity, are never mutated, and duplicates are permitted.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::money::Money;
use crate::error::TallyError;

/// Canonical date format for both storage and user input (DD-MM-YYYY)
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Parse a date in the canonical DD-MM-YYYY format
///
/// Never coerces: anything that doesn't match the format exactly is an
/// [`TallyError::InvalidDate`].
pub fn parse_date(input: &str) -> Result<NaiveDate, TallyError> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
        .map_err(|_| TallyError::InvalidDate(input.trim().to_string()))
}

/// Format a date in the canonical DD-MM-YYYY format
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// A single ledger transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Transaction date, day granularity
    #[serde(with = "ledger_date")]
    pub date: NaiveDate,

    /// Transaction amount; positive for every record this core writes
    pub amount: Money,

    /// Category label; only `Income` and `Expense` are aggregated
    pub category: Category,

    /// Free-text description, empty allowed
    #[serde(default)]
    pub description: String,
}

impl Record {
    /// Create a new record
    pub fn new(
        date: NaiveDate,
        amount: Money,
        category: Category,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date,
            amount,
            category,
            description: description.into(),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            format_date(self.date),
            self.amount,
            self.category
        )
    }
}

/// Serde adapter keeping the date field in the canonical ledger format
mod ledger_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::{format_date, parse_date};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_date(*date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse_date(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        let date = parse_date("20-07-2024").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 7, 20).unwrap());
    }

    #[test]
    fn test_parse_date_rejects_wrong_format() {
        // ISO order is not the canonical format
        assert!(matches!(
            parse_date("2024-01-01"),
            Err(TallyError::InvalidDate(_))
        ));
        assert!(parse_date("31/01/2024").is_err());
        assert!(parse_date("not a date").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn test_parse_date_rejects_impossible_dates() {
        assert!(parse_date("31-02-2024").is_err());
        assert!(parse_date("00-01-2024").is_err());
    }

    #[test]
    fn test_format_round_trip() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(format_date(date), "05-03-2024");
        assert_eq!(parse_date(&format_date(date)).unwrap(), date);
    }

    #[test]
    fn test_record_display() {
        let record = Record::new(
            NaiveDate::from_ymd_opt(2024, 7, 20).unwrap(),
            Money::from_cents(12500),
            Category::Income,
            "Salary",
        );
        assert_eq!(record.to_string(), "20-07-2024 $125.00 Income");
    }

    #[test]
    fn test_record_serde_uses_canonical_formats() {
        let record = Record::new(
            NaiveDate::from_ymd_opt(2024, 7, 20).unwrap(),
            Money::from_cents(12500),
            Category::Income,
            "Salary",
        );

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"20-07-2024\""));
        assert!(json.contains("\"125.00\""));
        assert!(json.contains("\"Income\""));

        let back: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
