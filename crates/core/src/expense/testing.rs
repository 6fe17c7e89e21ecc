//! Store doubles for tests in this and dependent crates.

use async_trait::async_trait;
use spendbook_shared::types::ExpenseId;

use super::filter::ExpenseFilter;
use super::store::{ExpenseStore, StoreError};
use super::types::{Expense, ExpenseDraft};

/// Message carried by every [`UnavailableStore`] failure.
pub const UNAVAILABLE_MESSAGE: &str = "connection refused";

/// Store whose every call fails, standing in for a lost database connection.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableStore;

#[async_trait]
impl ExpenseStore for UnavailableStore {
    async fn find(&self, _: &ExpenseFilter) -> Result<Vec<Expense>, StoreError> {
        Err(StoreError::new(UNAVAILABLE_MESSAGE))
    }

    async fn insert_one(&self, _: &ExpenseDraft) -> Result<Expense, StoreError> {
        Err(StoreError::new(UNAVAILABLE_MESSAGE))
    }

    async fn update_one(&self, _: ExpenseId, _: &ExpenseDraft) -> Result<u64, StoreError> {
        Err(StoreError::new(UNAVAILABLE_MESSAGE))
    }

    async fn delete_one(&self, _: ExpenseId) -> Result<u64, StoreError> {
        Err(StoreError::new(UNAVAILABLE_MESSAGE))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(StoreError::new(UNAVAILABLE_MESSAGE))
    }
}
