//! Storage layer
//!
//! A single append-only CSV file holds the whole ledger; see [`LedgerStore`].

pub mod ledger;

pub use ledger::{LedgerStore, LEDGER_COLUMNS};
