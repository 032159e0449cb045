//! Core data models for the Payroll Validator.
//!
//! This module contains all the domain models used throughout the engine.

mod finding;
mod outcome;
mod record;
mod rule;

pub use finding::{
    DUPLICATE_ENTRY, EXPECTED_POSITIVE, EXPECTED_UNIQUE_ID, ErrorEntry, ErrorReportRow,
    NOT_AVAILABLE, ObservedValue, Violation,
};
pub use outcome::{PayrollMetrics, ValidationOutcome};
pub use record::{Field, PayrollDataset, PayrollRecord, Schema};
pub use rule::{Rule, Severity};
