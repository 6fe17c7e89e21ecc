//! Expense service: validation, store calls and existence checks.

use std::sync::Arc;

use serde_json::{Map, Value};
use spendbook_shared::types::ExpenseId;

use super::error::ExpenseError;
use super::filter::{ExpenseFilter, sort_newest_first};
use super::store::ExpenseStore;
use super::types::Expense;
use super::validation::{parse_expense_id, validate_expense};

/// Expense service over an injected store.
#[derive(Clone)]
pub struct ExpenseService {
    store: Arc<dyn ExpenseStore>,
}

impl ExpenseService {
    /// Creates a service backed by `store`.
    #[must_use]
    pub fn new(store: Arc<dyn ExpenseStore>) -> Self {
        Self { store }
    }

    /// Lists records matching `filter`, most recent first.
    ///
    /// # Errors
    ///
    /// Returns `Store` if the backing store fails.
    pub async fn list(&self, filter: &ExpenseFilter) -> Result<Vec<Expense>, ExpenseError> {
        let mut expenses = self.store.find(filter).await?;
        sort_newest_first(&mut expenses);
        Ok(expenses)
    }

    /// Validates `payload` and inserts it as a new record.
    ///
    /// # Errors
    ///
    /// Returns a validation error before any write, or `Store` if the insert fails.
    pub async fn create(&self, payload: &Map<String, Value>) -> Result<Expense, ExpenseError> {
        let draft = validate_expense(payload)?;
        Ok(self.store.insert_one(&draft).await?)
    }

    /// Replaces the mutable fields of the record addressed by `raw_id`.
    ///
    /// The payload is validated before the identifier, and both before any
    /// store access. Returns the record as now stored.
    ///
    /// # Errors
    ///
    /// Returns a validation error, `InvalidId`, `NotFound` when no record
    /// matched, or `Store`.
    pub async fn update(
        &self,
        raw_id: &str,
        payload: &Map<String, Value>,
    ) -> Result<Expense, ExpenseError> {
        let draft = validate_expense(payload)?;
        let id = parse_expense_id(raw_id)?;

        let matched = self.store.update_one(id, &draft).await?;
        if matched == 0 {
            return Err(ExpenseError::NotFound(id));
        }

        Ok(draft.into_expense(id))
    }

    /// Deletes the record addressed by `raw_id`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidId`, `NotFound` when nothing was deleted, or `Store`.
    pub async fn delete(&self, raw_id: &str) -> Result<ExpenseId, ExpenseError> {
        let id = parse_expense_id(raw_id)?;

        let deleted = self.store.delete_one(id).await?;
        if deleted == 0 {
            return Err(ExpenseError::NotFound(id));
        }

        Ok(id)
    }
}
