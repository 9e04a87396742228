//! Filtered-view display formatting
//!
//! Renders a query result as a register table plus the summary block. Pure
//! string building; callers decide where it goes.

use crate::models::{format_date, Record};
use crate::services::{FilteredView, Summary};

/// Format one record as a register row
pub fn format_record_row(record: &Record, symbol: &str) -> String {
    format!(
        "{:10}  {:>12}  {:10}  {}",
        format_date(record.date),
        record.amount.format_with_symbol(symbol),
        truncate(record.category.as_label(), 10),
        record.description
    )
}

/// Format a filtered view and its summary for terminal display
///
/// An empty view gets the explicit no-transactions message instead of an
/// empty table, so a caller can't mistake it for a zero-sum result.
pub fn format_filtered_view(view: &FilteredView, summary: &Summary, symbol: &str) -> String {
    if view.is_empty() {
        return "No transactions found in the given date range.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "Transactions from {} to {}\n\n",
        format_date(view.range().start()),
        format_date(view.range().end())
    ));

    output.push_str(&format!(
        "{:10}  {:>12}  {:10}  {}\n",
        "Date", "Amount", "Category", "Description"
    ));
    output.push_str(&"-".repeat(60));
    output.push('\n');

    for record in view.records() {
        output.push_str(&format_record_row(record, symbol));
        output.push('\n');
    }

    output.push_str("\nSummary:\n");
    output.push_str(&format!(
        "Total Income:  {}\n",
        summary.total_income.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Total Expense: {}\n",
        summary.total_expense.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Net Savings:   {}\n",
        summary.net_savings().format_with_symbol(symbol)
    ));

    output
}

/// Truncate a string to a maximum length, padding short ones
fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        format!("{:width$}", s, width = max_len)
    } else {
        format!("{}...", &s[..max_len - 3])
    }
}
