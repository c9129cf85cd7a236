//! Error types for the sequence and text utilities.

use thiserror::Error;

/// Result type alias for utility operations.
pub type UtilResult<T> = Result<T, UtilError>;

/// Errors that can occur when an operation is called outside its domain.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UtilError {
    /// Argument outside the operation's domain (e.g. a negative factorial).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A fold that needs at least one comparable element found none.
    #[error("Empty input: {operation} requires at least one comparable element")]
    EmptyInput { operation: &'static str },

    /// `n!` does not fit in the result type.
    #[error("Overflow: {n}! does not fit in 128 bits")]
    Overflow { n: u64 },
}

impl UtilError {
    /// Creates an InvalidArgument error.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Creates an EmptyInput error for the named operation.
    pub fn empty_input(operation: &'static str) -> Self {
        Self::EmptyInput { operation }
    }

    /// Creates an Overflow error.
    pub fn overflow(n: u64) -> Self {
        Self::Overflow { n }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            UtilError::invalid_argument("factorial of -3").to_string(),
            "Invalid argument: factorial of -3"
        );
        assert_eq!(
            UtilError::empty_input("maximum").to_string(),
            "Empty input: maximum requires at least one comparable element"
        );
        assert_eq!(
            UtilError::overflow(35).to_string(),
            "Overflow: 35! does not fit in 128 bits"
        );
    }
}
