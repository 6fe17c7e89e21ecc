//! Application-wide error types.

use thiserror::Error;

/// Application error types.
///
/// Domain crates convert their own errors into this taxonomy; the API layer
/// turns it into a status code and a JSON body.
#[derive(Debug, Error)]
pub enum AppError {
    /// Request data failed validation.
    #[error("Validation error: {message}")]
    Validation {
        /// Machine-readable code, e.g. `INVALID_TITLE`.
        code: &'static str,
        /// Human-readable description.
        message: String,
    },

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),
}

impl AppError {
    /// Creates a validation error with the given code.
    pub fn validation(code: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            code,
            message: message.into(),
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Validation { .. } => 400,
            Self::NotFound(_) => 404,
            Self::Database(_) => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation { code, .. } => *code,
            Self::NotFound(_) => "NOT_FOUND",
            Self::Database(_) => "DATABASE_ERROR",
        }
    }

    /// Returns the message without the category prefix.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Validation { message, .. } => message,
            Self::NotFound(msg) | Self::Database(msg) => msg,
        }
    }

    /// Returns true for errors caused by the client rather than the server.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        self.status_code() < 500
    }
}
