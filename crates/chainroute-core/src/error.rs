//! Error types for chainroute with categorization:
//!
//! - **Validation errors**: CLI input issues (exit code 1)
//! - **Output errors**: serialization or stdout write failures (exit code 2)
//!
//! Registry lookups never construct these. Both lookup operations are total
//! and the error type serves the CLI boundary and output emission only.

use thiserror::Error;

/// Result alias for fallible chainroute operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// Input validation failure from the CLI boundary.
    #[error("validation error: {message}")]
    Validation {
        /// What was wrong with the input.
        message: String,
        /// Which field or argument was at fault, when known.
        field: Option<String>,
    },

    /// Failure serializing or writing output.
    #[error("output error: {0}")]
    Output(String),
}

impl Error {
    /// Create a validation error for a named field.
    pub fn validation(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Process exit code for this error category.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation { .. } => 1,
            Self::Output(_) => 2,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Output(err.to_string())
    }
}
