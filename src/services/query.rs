//! Range queries over the ledger
//!
//! Each query re-reads the whole file, filters to an inclusive date range,
//! and folds the recognized categories into a summary. Linear in total
//! record count, which is fine at personal-ledger volumes.

use crate::error::TallyResult;
use crate::models::{Category, DateRange, Money, Record};
use crate::storage::LedgerStore;

/// Income/expense totals over a filtered view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Sum of amounts over records categorized `Income`
    pub total_income: Money,
    /// Sum of amounts over records categorized `Expense`
    pub total_expense: Money,
}

impl Summary {
    /// Compute totals over a set of records
    ///
    /// Records outside the recognized categories contribute to neither
    /// total. That exclusion is deliberate and silent.
    pub fn of(records: &[Record]) -> Self {
        let mut total_income = Money::zero();
        let mut total_expense = Money::zero();

        for record in records {
            match record.category {
                Category::Income => total_income += record.amount,
                Category::Expense => total_expense += record.amount,
                Category::Other(_) => {}
            }
        }

        Self {
            total_income,
            total_expense,
        }
    }

    /// Income minus expenses; negative when spending exceeded income
    pub fn net_savings(&self) -> Money {
        self.total_income - self.total_expense
    }
}

/// The records of a ledger that fall inside a queried date range
///
/// Preserves the ledger's insertion order; never re-sorted by date.
#[derive(Debug, Clone)]
pub struct FilteredView {
    range: DateRange,
    records: Vec<Record>,
}

impl FilteredView {
    /// The queried range
    pub fn range(&self) -> DateRange {
        self.range
    }

    /// The matching records, in insertion order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of matching records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// The explicit "no transactions in range" signal
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Totals over this view
    pub fn summary(&self) -> Summary {
        Summary::of(&self.records)
    }
}

/// Service for range-filtered ledger queries
pub struct QueryService<'a> {
    store: &'a LedgerStore,
}

impl<'a> QueryService<'a> {
    /// Create a new query service
    pub fn new(store: &'a LedgerStore) -> Self {
        Self { store }
    }

    /// Load the ledger and keep the records whose date falls in the range
    pub fn query(&self, range: DateRange) -> TallyResult<FilteredView> {
        let records = self
            .store
            .load_all()?
            .into_iter()
            .filter(|r| range.contains(r.date))
            .collect();

        Ok(FilteredView { range, records })
    }
}
