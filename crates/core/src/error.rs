//! Core error types for calckit operations.
//!
//! All errors are explicit, typed, and recoverable - no panics allowed.

use thiserror::Error;

/// The standard Result type for calckit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for calckit operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    // Arithmetic errors
    #[error("cannot divide {dividend} by zero")]
    DivisionByZero { dividend: f64 },

    // Parsing errors
    #[error("invalid operation '{input}': {reason}")]
    InvalidOperation { input: String, reason: String },
}

impl Error {
    /// Create a division-by-zero error for the given dividend.
    #[must_use]
    pub const fn division_by_zero(dividend: f64) -> Self {
        Self::DivisionByZero { dividend }
    }

    /// Create an invalid operation error.
    pub fn invalid_operation(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidOperation {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Whether this is the arithmetic division-by-zero failure.
    #[must_use]
    pub const fn is_division_by_zero(&self) -> bool {
        matches!(self, Self::DivisionByZero { .. })
    }
}
