//! Error types for tally
//!
//! One enum covers the whole crate. Field-validation variants are
//! recoverable at the input boundary; storage and corruption variants are
//! fatal to the operation that hit them.

use thiserror::Error;

/// The main error type for tally operations
#[derive(Error, Debug)]
pub enum TallyError {
    /// Date input that does not match the canonical DD-MM-YYYY format
    #[error("Invalid date '{0}': use DD-MM-YYYY")]
    InvalidDate(String),

    /// Amount input that is not a parseable number
    #[error("Invalid amount '{0}': enter a plain number like 125 or 49.99")]
    InvalidAmount(String),

    /// Amount input that parsed but is zero or negative
    #[error("Amount must be greater than zero, got '{0}'")]
    NonPositiveAmount(String),

    /// Category input outside the recognized set
    #[error("Unknown category '{0}': use 'Income' or 'Expense'")]
    InvalidCategory(String),

    /// Query range whose start date falls after its end date
    #[error("Invalid range: start date {start} is after end date {end}")]
    InvalidRange { start: String, end: String },

    /// A ledger row that failed to parse during a load
    #[error("Corrupt ledger row at line {line}: {reason}")]
    CorruptRecord { line: u64, reason: String },

    /// Could not read or write the ledger file
    #[error("Could not read or write the ledger: {0}")]
    Storage(String),

    /// Settings file problems
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem failures outside the ledger itself
    #[error("I/O error: {0}")]
    Io(String),
}

impl TallyError {
    /// Check if this is a field-validation error, recoverable by re-prompting
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidDate(_)
                | Self::InvalidAmount(_)
                | Self::NonPositiveAmount(_)
                | Self::InvalidCategory(_)
                | Self::InvalidRange { .. }
        )
    }

    /// Check if this is a storage or corruption error, fatal to the operation
    pub fn is_storage(&self) -> bool {
        matches!(
            self,
            Self::CorruptRecord { .. } | Self::Storage(_) | Self::Io(_)
        )
    }
}

impl From<std::io::Error> for TallyError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for tally operations
pub type TallyResult<T> = Result<T, TallyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TallyError::InvalidDate("2024-01-01".into());
        assert_eq!(err.to_string(), "Invalid date '2024-01-01': use DD-MM-YYYY");
    }

    #[test]
    fn test_corrupt_record_display() {
        let err = TallyError::CorruptRecord {
            line: 3,
            reason: "bad amount".into(),
        };
        assert_eq!(err.to_string(), "Corrupt ledger row at line 3: bad amount");
    }

    #[test]
    fn test_validation_classifier() {
        assert!(TallyError::InvalidAmount("abc".into()).is_validation());
        assert!(TallyError::NonPositiveAmount("-5".into()).is_validation());
        assert!(!TallyError::Storage("disk full".into()).is_validation());
    }

    #[test]
    fn test_storage_classifier() {
        assert!(TallyError::Storage("disk full".into()).is_storage());
        assert!(!TallyError::InvalidCategory("food".into()).is_storage());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let tally_err: TallyError = io_err.into();
        assert!(matches!(tally_err, TallyError::Io(_)));
    }
}
