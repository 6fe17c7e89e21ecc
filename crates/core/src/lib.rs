//! Core business logic for Spendbook.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! Validation rules, query construction and the store abstraction live here.
//!
//! # Modules
//!
//! - `expense` - Expense records, validation, filtering and the store contract

pub mod expense;
