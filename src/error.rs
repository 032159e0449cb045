//! Error types for the Payroll Validator.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading payroll data,
//! reading the validation policy and exporting reports.
//!
//! A dataset that merely lacks a recognized column is not an error: the
//! rules inspecting that column are skipped.

use thiserror::Error;

/// The main error type for the Payroll Validator.
///
/// # Example
///
/// ```
/// use payroll_validator::error::EngineError;
///
/// let error = EngineError::InputNotFound {
///     path: "/missing/payroll.csv".to_string(),
/// };
/// assert_eq!(error.to_string(), "Payroll input not found: /missing/payroll.csv");
/// assert!(error.is_load_error());
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Policy file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Policy file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Policy parsed but contains an unusable setting.
    #[error("Invalid validation policy '{setting}': {message}")]
    InvalidPolicy {
        /// The offending setting.
        setting: String,
        /// Why the setting was rejected.
        message: String,
    },

    /// The payroll input file could not be opened.
    #[error("Payroll input not found: {path}")]
    InputNotFound {
        /// The path that was not found.
        path: String,
    },

    /// The payroll input is not well-formed tabular data.
    #[error("Malformed payroll input{}: {message}", fmt_row(.row))]
    MalformedInput {
        /// The 1-based data row where parsing failed, if known.
        row: Option<usize>,
        /// A description of the parse error.
        message: String,
    },

    /// A numeric column held a value that is not a number.
    #[error("Invalid number '{value}' in column '{column}' at row {row}")]
    InvalidNumber {
        /// The 1-based data row.
        row: usize,
        /// The column header.
        column: String,
        /// The raw cell contents.
        value: String,
    },

    /// The HTTP server could not start or stopped with an error.
    #[error("Server error on {addr}: {message}")]
    ServerError {
        /// The listen address.
        addr: String,
        /// A description of the failure.
        message: String,
    },

    /// The error report could not be written or read back.
    #[error("Error report export failed: {message}")]
    ExportError {
        /// A description of the failure.
        message: String,
    },
}

fn fmt_row(row: &Option<usize>) -> String {
    row.map(|r| format!(" at row {}", r)).unwrap_or_default()
}

impl EngineError {
    /// Returns true if the error means the input could not be loaded into a
    /// dataset. No validation is attempted after a load error.
    pub fn is_load_error(&self) -> bool {
        matches!(
            self,
            EngineError::InputNotFound { .. }
                | EngineError::MalformedInput { .. }
                | EngineError::InvalidNumber { .. }
        )
    }
}

impl From<csv::Error> for EngineError {
    fn from(err: csv::Error) -> Self {
        // Positions count the header as line 1; data rows start at 1.
        let row = err
            .position()
            .map(|pos| (pos.line() as usize).saturating_sub(1));
        EngineError::MalformedInput {
            row,
            message: err.to_string(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
