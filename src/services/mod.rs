//! Business logic layer
//!
//! Services take the store as an explicit dependency and hold no state of
//! their own.

pub mod query;
pub mod series;
pub mod transaction;

pub use query::{FilteredView, QueryService, Summary};
pub use series::{daily_series, DailySeries, SeriesPoint};
pub use transaction::{parse_positive_amount, resolve_date, TransactionInput, TransactionService};
