//! Daily-series display formatting
//!
//! Renders the aligned per-category series as one table, one row per day.
//! Stands in for a plotted chart; the series data itself stays renderable
//! by anything.

use crate::models::format_date;
use crate::services::DailySeries;

/// Format aligned daily series as a day-by-day table
pub fn format_series_table(series: &[DailySeries], symbol: &str) -> String {
    let Some(first) = series.first() else {
        return String::new();
    };

    let mut output = String::new();
    output.push_str(&format!(
        "Daily totals from {} to {}\n\n",
        format_date(first.points[0].date),
        format_date(first.points[first.len() - 1].date)
    ));

    output.push_str(&format!("{:10}", "Date"));
    for s in series {
        output.push_str(&format!("  {:>12}", s.category.as_label()));
    }
    output.push('\n');
    output.push_str(&"-".repeat(10 + 14 * series.len()));
    output.push('\n');

    for day in 0..first.len() {
        output.push_str(&format!("{:10}", format_date(first.points[day].date)));
        for s in series {
            output.push_str(&format!(
                "  {:>12}",
                s.points[day].amount.format_with_symbol(symbol)
            ));
        }
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{parse_date, Category, DateRange, Money, Record};
    use crate::services::{daily_series, QueryService};
    use crate::storage::LedgerStore;
    use tempfile::TempDir;

    #[test]
    fn test_series_table() {
        let temp_dir = TempDir::new().unwrap();
        let store = LedgerStore::new(temp_dir.path().join("ledger.csv"));
        store
            .append(&Record::new(
                parse_date("02-03-2024").unwrap(),
                Money::from_cents(5000),
                Category::Income,
                "",
            ))
            .unwrap();

        let view = QueryService::new(&store)
            .query(DateRange::parse("01-03-2024", "03-03-2024").unwrap())
            .unwrap();
        let table = format_series_table(&daily_series(&view), "$");

        assert!(table.contains("Daily totals from 01-03-2024 to 03-03-2024"));
        assert!(table.contains("Income"));
        assert!(table.contains("Expense"));
        assert!(table.contains("02-03-2024"));
        assert!(table.contains("$50.00"));
        // Three day rows plus header, separator, title and blank line
        assert_eq!(table.lines().count(), 7);
    }

    #[test]
    fn test_empty_series_slice() {
        assert_eq!(format_series_table(&[], "$"), "");
    }
}
