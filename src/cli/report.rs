//! Range view CLI command
//!
//! The `view` command: filter the ledger to a date range, print the register
//! and summary, and optionally the day-by-day category totals.

use clap::Args;

use crate::config::Settings;
use crate::display::{format_filtered_view, format_series_table};
use crate::error::TallyResult;
use crate::models::DateRange;
use crate::services::{daily_series, QueryService};
use crate::storage::LedgerStore;

/// Arguments for `tally view`
#[derive(Args)]
pub struct ViewArgs {
    /// Start date (DD-MM-YYYY)
    #[arg(long)]
    pub from: String,

    /// End date (DD-MM-YYYY)
    #[arg(long)]
    pub to: String,

    /// Also print the day-by-day totals per category
    #[arg(long)]
    pub series: bool,
}

/// Handle the view command
pub fn handle_view(store: &LedgerStore, settings: &Settings, args: ViewArgs) -> TallyResult<()> {
    let range = DateRange::parse(&args.from, &args.to)?;
    let view = QueryService::new(store).query(range)?;
    let summary = view.summary();
    let symbol = &settings.currency_symbol;

    print!("{}", format_filtered_view(&view, &summary, symbol));

    if args.series && !view.is_empty() {
        println!();
        print!("{}", format_series_table(&daily_series(&view), symbol));
    }

    Ok(())
}
