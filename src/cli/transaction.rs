//! Transaction CLI commands
//!
//! The `add` command. Fields supplied as flags are taken as-is; missing
//! fields are collected interactively.

use clap::Args;

use crate::cli::prompt;
use crate::error::TallyResult;
use crate::services::{TransactionInput, TransactionService};
use crate::storage::LedgerStore;

/// Arguments for `tally add`
#[derive(Args)]
pub struct AddArgs {
    /// Transaction date (DD-MM-YYYY), defaults to today
    #[arg(short, long)]
    pub date: Option<String>,

    /// Amount, e.g. "125" or "49.99"
    #[arg(short, long, allow_hyphen_values = true)]
    pub amount: Option<String>,

    /// Category: Income or Expense (case-insensitive)
    #[arg(short, long)]
    pub category: Option<String>,

    /// Free-text description
    #[arg(short = 'm', long)]
    pub description: Option<String>,
}

/// Handle the add command
pub fn handle_add(store: &LedgerStore, args: AddArgs) -> TallyResult<()> {
    let input = match (args.amount, args.category) {
        (Some(amount), Some(category)) => TransactionInput {
            date: args.date,
            amount,
            category,
            description: args.description,
        },
        (amount, category) => {
            prompt::prompt_transaction(args.date, amount, category, args.description)?
        }
    };

    let record = TransactionService::new(store).add(input)?;
    println!("Entry added successfully");
    println!("{} {}", record, record.description);
    Ok(())
}
