//! Error types for the Payroll Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while building employee records,
//! loading configuration, and processing a payroll run.

use thiserror::Error;

/// The main error type for the Payroll Engine.
///
/// Validation failures in the employee model surface as
/// [`PayrollError::InvalidArgument`], whose display text is exactly the
/// human-readable constraint message.
///
/// # Example
///
/// ```
/// use payroll_engine::error::PayrollError;
///
/// let error = PayrollError::InvalidArgument {
///     field: "wage",
///     message: "Hourly wage must be >= 0.0",
/// };
/// assert_eq!(error.to_string(), "Hourly wage must be >= 0.0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayrollError {
    /// A numeric field was outside its permitted domain.
    #[error("{message}")]
    InvalidArgument {
        /// The field that failed validation.
        field: &'static str,
        /// The constraint that was violated.
        message: &'static str,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A calculation produced a value too large for `Decimal`.
    #[error("Arithmetic overflow while calculating {operation}")]
    ArithmeticOverflow {
        /// The calculation that overflowed.
        operation: &'static str,
    },

    /// A payroll report could not be serialized.
    #[error("Failed to serialize payroll report: {message}")]
    ReportSerialization {
        /// A description of the serialization error.
        message: String,
    },
}

impl PayrollError {
    /// Returns the offending field name for validation errors.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            PayrollError::InvalidArgument { field, .. } => Some(*field),
            _ => None,
        }
    }
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
