//! Error types for the salary calculator.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every condition the interactive session can run into.

use thiserror::Error;

/// The main error type for the salary calculator.
///
/// The calculation itself is infallible; these errors come from reading and
/// validating user input and from writing to the terminal.
///
/// # Example
///
/// ```
/// use salary_calculator::error::SalaryError;
///
/// let error = SalaryError::InvalidMaritalStatus {
///     token: "maybe".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid choice. Use 'y' or 'n'.");
/// ```
#[derive(Debug, Error)]
pub enum SalaryError {
    /// Input was not a non-negative whole number.
    #[error("Please enter a valid number!")]
    InvalidNumber {
        /// The rejected input, without its line ending.
        input: String,
    },

    /// Marital status answer was neither `y` nor `n`.
    #[error("Invalid choice. Use 'y' or 'n'.")]
    InvalidMaritalStatus {
        /// The rejected token.
        token: String,
    },

    /// Standard input was closed before an answer was given.
    #[error("End of input")]
    EndOfInput,

    /// Reading from or writing to the terminal failed.
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A calculation could not be serialized for JSON output.
    #[error("Failed to serialize calculation: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A type alias for Results that return SalaryError.
pub type SalaryResult<T> = Result<T, SalaryError>;
