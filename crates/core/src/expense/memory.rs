//! In-memory expense store.

use async_trait::async_trait;
use dashmap::DashMap;
use spendbook_shared::types::ExpenseId;

use super::filter::{ExpenseFilter, sort_newest_first};
use super::store::{ExpenseStore, StoreError};
use super::types::{Expense, ExpenseDraft};

/// Expense store backed by a concurrent hash map.
///
/// Each entry is locked independently, which gives the same per-record
/// atomicity as the database store. Data is lost when the process exits.
#[derive(Debug, Default)]
pub struct InMemoryExpenseStore {
    records: DashMap<ExpenseId, Expense>,
}

impl InMemoryExpenseStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns a copy of the record with `id`, if any.
    #[must_use]
    pub fn get(&self, id: ExpenseId) -> Option<Expense> {
        self.records.get(&id).map(|entry| entry.value().clone())
    }
}

#[async_trait]
impl ExpenseStore for InMemoryExpenseStore {
    async fn find(&self, filter: &ExpenseFilter) -> Result<Vec<Expense>, StoreError> {
        let mut expenses: Vec<Expense> = self
            .records
            .iter()
            .filter(|entry| filter.matches(entry.value()))
            .map(|entry| entry.value().clone())
            .collect();

        sort_newest_first(&mut expenses);
        Ok(expenses)
    }

    async fn insert_one(&self, draft: &ExpenseDraft) -> Result<Expense, StoreError> {
        let expense = draft.clone().into_expense(ExpenseId::new());
        self.records.insert(expense.id, expense.clone());
        Ok(expense)
    }

    async fn update_one(&self, id: ExpenseId, draft: &ExpenseDraft) -> Result<u64, StoreError> {
        match self.records.get_mut(&id) {
            Some(mut entry) => {
                *entry = draft.clone().into_expense(id);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_one(&self, id: ExpenseId) -> Result<u64, StoreError> {
        Ok(u64::from(self.records.remove(&id).is_some()))
    }
}
