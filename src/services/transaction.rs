//! Transaction entry service
//!
//! The add boundary: validates raw field input, builds a [`Record`], and
//! appends it to the store. Validation never retries here; re-prompting on
//! failure is the caller's job.

use chrono::NaiveDate;

use crate::error::{TallyError, TallyResult};
use crate::models::{parse_date, Category, Money, Record};
use crate::storage::LedgerStore;

/// Raw field input for a new transaction, exactly as the user supplied it
#[derive(Debug, Clone, Default)]
pub struct TransactionInput {
    /// Transaction date in DD-MM-YYYY; `None` or empty means today
    pub date: Option<String>,
    /// Amount as a decimal literal; must be greater than zero
    pub amount: String,
    /// Category label; resolved case-insensitively to the recognized set
    pub category: String,
    /// Free-text description; `None` maps to empty
    pub description: Option<String>,
}

/// Resolve a date field, defaulting an absent or empty input to today
pub fn resolve_date(input: Option<&str>) -> TallyResult<NaiveDate> {
    match input.map(str::trim) {
        None | Some("") => Ok(chrono::Local::now().date_naive()),
        Some(s) => parse_date(s),
    }
}

/// Parse an amount field, rejecting values that are not strictly positive
pub fn parse_positive_amount(input: &str) -> TallyResult<Money> {
    let amount = Money::parse(input)?;
    if !amount.is_positive() {
        return Err(TallyError::NonPositiveAmount(input.trim().to_string()));
    }
    Ok(amount)
}

/// Service for recording new transactions
pub struct TransactionService<'a> {
    store: &'a LedgerStore,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(store: &'a LedgerStore) -> Self {
        Self { store }
    }

    /// Validate the input, append the resulting record, and return it
    pub fn add(&self, input: TransactionInput) -> TallyResult<Record> {
        let date = resolve_date(input.date.as_deref())?;
        let amount = parse_positive_amount(&input.amount)?;
        let category = Category::parse(&input.category)?;
        let description = input.description.unwrap_or_default();

        let record = Record::new(date, amount, category, description);
        self.store.append(&record)?;
        Ok(record)
    }
}
