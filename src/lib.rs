//! tally - Terminal-based personal finance ledger
//!
//! Records income and expense transactions in a single append-only CSV file
//! and answers date-range queries with a summary and per-category daily
//! series.
//!
//! # Layout
//!
//! - `models`: money, categories, records and query ranges
//! - `storage`: the append-only CSV ledger store
//! - `services`: entry validation, range queries, series building
//! - `display`: terminal output formatting
//! - `cli`: command handlers and interactive prompts
//! - `config`: file locations and user settings
//! - `error`: the crate-wide error type
//!
//! # Example
//!
//! ```rust,ignore
//! use tally::models::DateRange;
//! use tally::services::QueryService;
//! use tally::storage::LedgerStore;
//!
//! let store = LedgerStore::new("ledger.csv".into());
//! let view = QueryService::new(&store)
//!     .query(DateRange::parse("01-01-2024", "31-01-2024")?)?;
//! let summary = view.summary();
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{TallyError, TallyResult};
