//! Expense record lifecycle.
//!
//! This module implements the expense store service:
//! - Domain types for persisted and validated records
//! - Validation of loosely typed request payloads
//! - Filter construction and the mandatory newest-first ordering
//! - The store contract and an in-memory implementation
//! - The service tying validation, store calls and error mapping together

pub mod error;
pub mod filter;
pub mod memory;
pub mod service;
pub mod store;
pub mod types;
pub mod validation;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

#[cfg(test)]
mod service_props;
#[cfg(test)]
mod validation_props;

pub use error::ExpenseError;
pub use filter::{ExpenseFilter, ListExpensesQuery, sort_newest_first};
pub use memory::InMemoryExpenseStore;
pub use service::ExpenseService;
pub use store::{ExpenseStore, StoreError};
pub use types::{DEFAULT_CATEGORY, Expense, ExpenseDraft, MIN_TITLE_CHARS};
pub use validation::{parse_date, parse_expense_id, validate_expense};
