//! CLI command handlers
//!
//! This module bridges clap argument parsing with the service layer.

pub mod prompt;
pub mod report;
pub mod transaction;

pub use report::{handle_view, ViewArgs};
pub use transaction::{handle_add, AddArgs};
