//! Backing store contract for expense records.

use async_trait::async_trait;
use spendbook_shared::types::ExpenseId;
use thiserror::Error;

use super::filter::ExpenseFilter;
use super::types::{Expense, ExpenseDraft};

/// Failure reported by a backing store.
///
/// The core does not decompose persistence faults; the message is kept for
/// diagnostics only.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct StoreError {
    message: String,
}

impl StoreError {
    /// Creates a store error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the underlying message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Collection of expense records.
///
/// Every call touches at most one record, except `find`, and each write is
/// atomic for that record. Implementations must not retry internally.
#[async_trait]
pub trait ExpenseStore: Send + Sync {
    /// Returns all records matching the filter.
    async fn find(&self, filter: &ExpenseFilter) -> Result<Vec<Expense>, StoreError>;

    /// Inserts a new record under a freshly assigned identifier.
    async fn insert_one(&self, draft: &ExpenseDraft) -> Result<Expense, StoreError>;

    /// Replaces the mutable fields of the record with `id`.
    ///
    /// Returns the number of matched records (0 or 1). Never inserts.
    async fn update_one(&self, id: ExpenseId, draft: &ExpenseDraft) -> Result<u64, StoreError>;

    /// Removes the record with `id`, returning the number deleted (0 or 1).
    async fn delete_one(&self, id: ExpenseId) -> Result<u64, StoreError>;

    /// Checks that the store is reachable.
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
