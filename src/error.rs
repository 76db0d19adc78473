//! Error types shared by every module of the crate.
//!
//! `Error` is what the public functions return. Arithmetic failures get their
//! own kind, `ArithmeticError`, so callers can tell a division by zero or an
//! overflow apart from a bad argument.

use thiserror::Error;

/// Result alias used throughout `binrec_lib`.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid argument: expected a non-negative number, got {0}")]
    NegativeInput(i64),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("invalid input {input:?}: expected {expected}")]
    InvalidInput { input: String, expected: &'static str },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
}

impl Error {
    /// True for the arithmetic kind (division by zero, overflow).
    pub fn is_arithmetic(&self) -> bool {
        matches!(self, Error::Arithmetic(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    #[error("Cannot divide by zero.")]
    DivisionByZero,

    #[error("overflow: result of {operation} does not fit")]
    Overflow { operation: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_errors_convert_and_classify() {
        let err: Error = ArithmeticError::DivisionByZero.into();
        assert!(err.is_arithmetic());
        assert_eq!(err.to_string(), "Cannot divide by zero.");
    }

    #[test]
    fn negative_input_message_names_the_value() {
        let err = Error::NegativeInput(-3);
        assert!(!err.is_arithmetic());
        assert!(err.to_string().contains("-3"));
    }
}
