//! Core data models
//!
//! The typed shapes the rest of the crate works with: monetary amounts,
//! categories, ledger records, and query ranges.

pub mod category;
pub mod money;
pub mod range;
pub mod record;

pub use category::Category;
pub use money::Money;
pub use range::DateRange;
pub use record::{format_date, parse_date, Record, DATE_FORMAT};
