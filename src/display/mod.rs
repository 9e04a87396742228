//! Terminal display formatting
//!
//! All user-facing rendering lives here; the models and services return
//! plain data.

pub mod series;
pub mod transaction;

pub use series::format_series_table;
pub use transaction::{format_filtered_view, format_record_row};
