//! Filtering and ordering for expense listings.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::error::ExpenseError;
use super::types::Expense;
use super::validation::parse_date;

/// Query parameters accepted by the list operation, before validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListExpensesQuery {
    /// Exact category to match.
    pub category: Option<String>,
    /// Earliest date to include.
    pub start: Option<String>,
    /// Latest date to include.
    pub end: Option<String>,
}

impl ListExpensesQuery {
    /// Converts raw parameters into a filter.
    ///
    /// Empty parameters are treated as absent.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDate` if `start` or `end` is present but not a date.
    pub fn into_filter(self) -> Result<ExpenseFilter, ExpenseError> {
        let mut filter = ExpenseFilter::new();

        if let Some(category) = non_empty(self.category) {
            filter = filter.with_category(category);
        }

        if let Some(start) = non_empty(self.start) {
            filter = filter.starting_at(parse_date(&start).ok_or(ExpenseError::InvalidDate)?);
        }

        if let Some(end) = non_empty(self.end) {
            filter = filter.ending_at(parse_date(&end).ok_or(ExpenseError::InvalidDate)?);
        }

        Ok(filter)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Predicate over expense records. An empty filter matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseFilter {
    /// Category must equal this value.
    pub category: Option<String>,
    /// Date must be on or after this instant.
    pub start: Option<DateTime<Utc>>,
    /// Date must be on or before this instant.
    pub end: Option<DateTime<Utc>>,
}

impl ExpenseFilter {
    /// Creates a new empty filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts to one category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Sets the inclusive lower date bound.
    #[must_use]
    pub const fn starting_at(mut self, start: DateTime<Utc>) -> Self {
        self.start = Some(start);
        self
    }

    /// Sets the inclusive upper date bound.
    #[must_use]
    pub const fn ending_at(mut self, end: DateTime<Utc>) -> Self {
        self.end = Some(end);
        self
    }

    /// Returns true if the filter is empty (matches everything).
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.category.is_none() && self.start.is_none() && self.end.is_none()
    }

    /// Returns true if the record satisfies every condition.
    #[must_use]
    pub fn matches(&self, expense: &Expense) -> bool {
        if self
            .category
            .as_ref()
            .is_some_and(|c| *c != expense.category)
        {
            return false;
        }

        if self.start.is_some_and(|start| expense.date < start) {
            return false;
        }

        !self.end.is_some_and(|end| expense.date > end)
    }
}

/// Orders records by date, most recent first.
///
/// Records sharing a date are ordered by id, newest first, so the output is
/// deterministic.
pub fn sort_newest_first(expenses: &mut [Expense]) {
    expenses.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| b.id.cmp(&a.id)));
}
