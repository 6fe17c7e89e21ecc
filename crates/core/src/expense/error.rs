//! Expense error types.

use spendbook_shared::{AppError, types::ExpenseId};
use thiserror::Error;

use super::store::StoreError;

/// Errors that can occur during expense operations.
///
/// Every kind except `Store` is caused by the caller; `Store` is an infrastructure
/// fault carrying the backend's message.
#[derive(Debug, Error)]
pub enum ExpenseError {
    // ========== Validation Errors ==========
    /// Title missing, not text, or shorter than three characters.
    #[error("Title is required and must be at least 3 characters")]
    InvalidTitle,

    /// Amount missing, not numeric, or not greater than zero.
    #[error("Amount is required and must be greater than 0")]
    InvalidAmount,

    /// Amount is positive but cannot be represented exactly.
    #[error(
        "Amount must be between 0.0000000000000000000000000001 and 79228162514264337593543950335"
    )]
    AmountOutOfRange,

    /// Date missing or not a valid calendar date.
    #[error("A valid date between years 1 and 9999 is required")]
    InvalidDate,

    /// Query string could not be read.
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// Identifier is not a well-formed expense id.
    #[error("Invalid expense id: {0}")]
    InvalidId(String),

    // ========== Existence Errors ==========
    /// Identifier is well-formed but matches no record.
    #[error("Expense not found: {0}")]
    NotFound(ExpenseId),

    // ========== Infrastructure Errors ==========
    /// The backing store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ExpenseError {
    /// Returns the machine-readable code for this error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidTitle => "INVALID_TITLE",
            Self::InvalidAmount | Self::AmountOutOfRange => "INVALID_AMOUNT",
            Self::InvalidDate => "INVALID_DATE",
            Self::InvalidQuery(_) => "INVALID_QUERY",
            Self::InvalidId(_) => "INVALID_ID",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Store(_) => "DATABASE_ERROR",
        }
    }
}

impl From<ExpenseError> for AppError {
    fn from(err: ExpenseError) -> Self {
        match err {
            ExpenseError::NotFound(_) => Self::NotFound("Expense not found".to_string()),
            ExpenseError::Store(e) => Self::Database(e.to_string()),
            other => Self::validation(other.code(), other.to_string()),
        }
    }
}
