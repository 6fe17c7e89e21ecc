//! Domain types for expense records.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use spendbook_shared::types::ExpenseId;

use super::error::ExpenseError;

/// Category assigned when a request omits one or sends an empty string.
pub const DEFAULT_CATEGORY: &str = "Others";

/// Minimum number of characters in a title.
pub const MIN_TITLE_CHARS: usize = 3;

/// A persisted expense record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Store-assigned identifier.
    pub id: ExpenseId,
    /// Short label.
    pub title: String,
    /// Positive amount, serialized as a JSON number.
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    /// Category label.
    pub category: String,
    /// When the expense happened.
    pub date: DateTime<Utc>,
}

/// The four mutable fields of an expense, already validated and normalized.
///
/// Stores accept only drafts, so unvalidated request data can never be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseDraft {
    title: String,
    amount: Decimal,
    category: String,
    date: DateTime<Utc>,
}

impl ExpenseDraft {
    /// Builds a draft from typed values, enforcing the record invariants.
    ///
    /// Values are stored as given; a missing or empty category becomes
    /// [`DEFAULT_CATEGORY`].
    ///
    /// # Errors
    ///
    /// Returns `InvalidTitle` for titles shorter than [`MIN_TITLE_CHARS`] and
    /// `InvalidAmount` for amounts that are not strictly positive.
    pub fn new(
        title: &str,
        amount: Decimal,
        category: Option<&str>,
        date: DateTime<Utc>,
    ) -> Result<Self, ExpenseError> {
        if title.chars().count() < MIN_TITLE_CHARS {
            return Err(ExpenseError::InvalidTitle);
        }

        if amount <= Decimal::ZERO {
            return Err(ExpenseError::InvalidAmount);
        }

        let category = match category {
            Some(c) if !c.is_empty() => c.to_string(),
            _ => DEFAULT_CATEGORY.to_string(),
        };

        Ok(Self {
            title: title.to_string(),
            amount,
            category,
            date,
        })
    }

    /// Title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// Category.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Date.
    #[must_use]
    pub const fn date(&self) -> DateTime<Utc> {
        self.date
    }

    /// Attaches an identifier, producing the stored form of the record.
    #[must_use]
    pub fn into_expense(self, id: ExpenseId) -> Expense {
        Expense {
            id,
            title: self.title,
            amount: self.amount,
            category: self.category,
            date: self.date,
        }
    }
}
