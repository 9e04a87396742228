//! Transaction category model
//!
//! The ledger recognizes two categories for aggregation, `Income` and
//! `Expense`. Anything else a ledger file contains is carried verbatim as
//! `Other`: it shows up in filtered views but is deliberately excluded from
//! totals and series.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TallyError;

/// A transaction's category
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    /// Money coming in; counted toward total income
    Income,
    /// Money going out; counted toward total expenses
    Expense,
    /// Any other label found in the ledger; stored verbatim, never aggregated
    Other(String),
}

impl Category {
    /// The categories that participate in aggregation and series building
    pub fn recognized() -> [Category; 2] {
        [Category::Income, Category::Expense]
    }

    /// Parse user input into a recognized category
    ///
    /// Case-insensitive; the canonical spelling is stored regardless of the
    /// casing entered. Input outside the recognized set is rejected with
    /// [`TallyError::InvalidCategory`].
    pub fn parse(input: &str) -> Result<Self, TallyError> {
        match input.trim().to_lowercase().as_str() {
            "income" => Ok(Category::Income),
            "expense" => Ok(Category::Expense),
            _ => Err(TallyError::InvalidCategory(input.trim().to_string())),
        }
    }

    /// Map a stored label to a category, never failing
    ///
    /// Only the exact canonical spellings count as recognized; everything
    /// else loads as `Other` and stays out of the totals.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Income" => Category::Income,
            "Expense" => Category::Expense,
            other => Category::Other(other.to_string()),
        }
    }

    /// The label stored in the ledger file
    pub fn as_label(&self) -> &str {
        match self {
            Category::Income => "Income",
            Category::Expense => "Expense",
            Category::Other(label) => label,
        }
    }

    /// Check if this category participates in aggregation
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Category::Other(_))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_label())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_label())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(Category::from_label(&label))
    }
}
