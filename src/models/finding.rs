//! Validation findings.
//!
//! This module contains the [`Violation`] summary row, the per-record
//! [`ErrorEntry`] detail row, and [`ErrorReportRow`], the flat string form of
//! an entry used by the exported CSV report.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{PayrollRecord, Rule, Severity};

/// Placeholder used for an absent employee ID or name.
pub const NOT_AVAILABLE: &str = "N/A";

/// Expected-value text for the sign checks.
pub const EXPECTED_POSITIVE: &str = "Positive value";

/// Expected-value text for the duplicate ID check.
pub const EXPECTED_UNIQUE_ID: &str = "Unique ID";

/// Observed-value label for the duplicate ID check.
pub const DUPLICATE_ENTRY: &str = "Duplicate Entry";

/// An aggregate finding that a rule matched at least one record.
///
/// # Example
///
/// ```
/// use payroll_validator::models::{Rule, Severity, Violation};
///
/// let violation = Violation::new(Rule::DuplicateEmployeeIds, 2);
/// assert_eq!(violation.severity, Severity::High);
/// assert_eq!(violation.affected_count, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// The rule that matched.
    pub rule: Rule,
    /// The rule's fixed severity.
    pub severity: Severity,
    /// Number of records matching the rule.
    pub affected_count: usize,
}

impl Violation {
    /// Creates a violation, taking the severity from the rule.
    pub fn new(rule: Rule, affected_count: usize) -> Self {
        Self {
            rule,
            severity: rule.severity(),
            affected_count,
        }
    }
}

/// The offending value recorded in an [`ErrorEntry`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum ObservedValue {
    /// A plain number, rendered without trailing zeros.
    Number(Decimal),
    /// A money amount, rendered as `$` followed by two decimal places.
    Currency(Decimal),
    /// A fixed description such as "Duplicate Entry".
    Label(String),
}

impl fmt::Display for ObservedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObservedValue::Number(n) => write!(f, "{}", n.normalize()),
            ObservedValue::Currency(amount) => {
                // Sign is kept even when the amount rounds to zero.
                let sign = if amount.is_sign_negative() { "-" } else { "" };
                write!(f, "${}{:.2}", sign, amount.abs().round_dp(2))
            }
            ObservedValue::Label(label) => f.write_str(label),
        }
    }
}

/// A single per-record, per-rule detail row.
///
/// A record flagged by several rules appears once per rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEntry {
    /// 1-based data row of the flagged record.
    pub row_number: usize,
    /// Employee ID, or `N/A` when absent.
    pub employee_id: String,
    /// Employee name, or `N/A` when absent.
    pub employee_name: String,
    /// The rule that flagged the record.
    pub rule: Rule,
    /// The offending value.
    pub observed_value: ObservedValue,
    /// Description of the valid condition.
    pub expected_value: String,
}

impl ErrorEntry {
    /// Creates an entry for the given record, filling in placeholders for an
    /// absent ID or name.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_validator::models::{ErrorEntry, ObservedValue, PayrollRecord, Rule};
    ///
    /// let record = PayrollRecord { row_number: 3, ..Default::default() };
    /// let entry = ErrorEntry::for_record(
    ///     &record,
    ///     Rule::DuplicateEmployeeIds,
    ///     ObservedValue::Label("Duplicate Entry".to_string()),
    ///     "Unique ID",
    /// );
    /// assert_eq!(entry.employee_id, "N/A");
    /// assert_eq!(entry.row_number, 3);
    /// ```
    pub fn for_record(
        record: &PayrollRecord,
        rule: Rule,
        observed_value: ObservedValue,
        expected_value: impl Into<String>,
    ) -> Self {
        Self {
            row_number: record.row_number,
            employee_id: record
                .employee_id
                .clone()
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            employee_name: record
                .employee_name
                .clone()
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            rule,
            observed_value,
            expected_value: expected_value.into(),
        }
    }

    /// Returns the row as it appears in the detail table and exported report.
    pub fn to_report_row(&self) -> ErrorReportRow {
        ErrorReportRow {
            employee_id: self.employee_id.clone(),
            employee_name: self.employee_name.clone(),
            error_type: self.rule.label().to_string(),
            value: self.observed_value.to_string(),
            expected: self.expected_value.clone(),
        }
    }
}

/// One row of the exported error report, with every cell as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReportRow {
    /// Employee ID column.
    #[serde(rename = "Employee ID")]
    pub employee_id: String,
    /// Employee Name column.
    #[serde(rename = "Employee Name")]
    pub employee_name: String,
    /// Error Type column (the rule's detail label).
    #[serde(rename = "Error Type")]
    pub error_type: String,
    /// Value column.
    #[serde(rename = "Value")]
    pub value: String,
    /// Expected column.
    #[serde(rename = "Expected")]
    pub expected: String,
}

impl ErrorReportRow {
    /// Column headers of the exported report, in order.
    pub const HEADERS: [&'static str; 5] = [
        "Employee ID",
        "Employee Name",
        "Error Type",
        "Value",
        "Expected",
    ];

    /// Returns the rule named in the Error Type column, if recognized.
    pub fn rule(&self) -> Option<Rule> {
        self.error_type.parse().ok()
    }
}
