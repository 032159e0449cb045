//! Validation rule identifiers and severities.
//!
//! Each [`Rule`] carries fixed metadata: a summary name, a detail label, a
//! [`Severity`], and the columns it needs in order to run.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Field;

/// Priority label attached to a rule.
///
/// Ordered from least to most severe.
///
/// # Example
///
/// ```
/// use payroll_validator::models::Severity;
///
/// assert!(Severity::Critical > Severity::High);
/// assert_eq!(Severity::High.to_string(), "High");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Informational finding.
    Low,
    /// Finding that should be reviewed.
    Medium,
    /// Finding that should be corrected before processing.
    High,
    /// Finding that blocks processing.
    Critical,
}

impl Severity {
    /// Returns the display name of the severity.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Critical => "Critical",
        }
    }

    /// Returns the presentation style token for the severity.
    ///
    /// Only the outer layers use this; the engine never looks at it.
    pub fn style_token(self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::High => "warning",
            Severity::Medium | Severity::Low => "plain",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A validation check.
///
/// The first three rules are always evaluated when their columns are
/// present. `MissingCriticalData` and `ExcessiveHours` only run when the
/// validation policy enables them.
///
/// # Example
///
/// ```
/// use payroll_validator::models::{Rule, Severity};
///
/// let rule = Rule::NegativeNetPay;
/// assert_eq!(rule.name(), "Negative Net Pay");
/// assert_eq!(rule.label(), "Negative Pay");
/// assert_eq!(rule.severity(), Severity::Critical);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rule {
    /// `Hours Worked` below zero.
    #[serde(rename = "Negative Hours Worked")]
    NegativeHoursWorked,
    /// `Net Pay` below zero.
    #[serde(rename = "Negative Net Pay")]
    NegativeNetPay,
    /// `Employee ID` shared by two or more records.
    #[serde(rename = "Duplicate Employee IDs")]
    DuplicateEmployeeIds,
    /// A critical column left empty.
    #[serde(rename = "Missing Critical Data")]
    MissingCriticalData,
    /// `Hours Worked` above the configured overtime ceiling.
    #[serde(rename = "Excessive Hours")]
    ExcessiveHours,
}

impl Rule {
    /// The rules that always run, in evaluation order.
    pub const FIXED: [Rule; 3] = [
        Rule::NegativeHoursWorked,
        Rule::NegativeNetPay,
        Rule::DuplicateEmployeeIds,
    ];

    /// All rules in evaluation order.
    pub const ALL: [Rule; 5] = [
        Rule::NegativeHoursWorked,
        Rule::NegativeNetPay,
        Rule::DuplicateEmployeeIds,
        Rule::MissingCriticalData,
        Rule::ExcessiveHours,
    ];

    /// Returns the name used in the summary table.
    pub fn name(self) -> &'static str {
        match self {
            Rule::NegativeHoursWorked => "Negative Hours Worked",
            Rule::NegativeNetPay => "Negative Net Pay",
            Rule::DuplicateEmployeeIds => "Duplicate Employee IDs",
            Rule::MissingCriticalData => "Missing Critical Data",
            Rule::ExcessiveHours => "Excessive Hours",
        }
    }

    /// Returns the short label used in the detail table.
    pub fn label(self) -> &'static str {
        match self {
            Rule::NegativeHoursWorked => "Negative Hours",
            Rule::NegativeNetPay => "Negative Pay",
            Rule::DuplicateEmployeeIds => "Duplicate ID",
            Rule::MissingCriticalData => "Missing Data",
            Rule::ExcessiveHours => "Overtime",
        }
    }

    /// Returns the fixed severity of the rule.
    pub fn severity(self) -> Severity {
        match self {
            Rule::NegativeHoursWorked => Severity::High,
            Rule::NegativeNetPay => Severity::Critical,
            Rule::DuplicateEmployeeIds => Severity::High,
            Rule::MissingCriticalData => Severity::Medium,
            Rule::ExcessiveHours => Severity::Low,
        }
    }

    /// Returns the columns that must be present for the rule to run.
    ///
    /// `MissingCriticalData` depends on the configured critical fields and
    /// has no fixed requirement.
    pub fn required_fields(self) -> &'static [Field] {
        match self {
            Rule::NegativeHoursWorked | Rule::ExcessiveHours => &[Field::HoursWorked],
            Rule::NegativeNetPay => &[Field::NetPay],
            Rule::DuplicateEmployeeIds => &[Field::EmployeeId],
            Rule::MissingCriticalData => &[],
        }
    }

    /// Returns true for the rules counted in `errors_found`.
    pub fn is_fixed(self) -> bool {
        Rule::FIXED.contains(&self)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Rule {
    type Err = String;

    /// Parses either the summary name or the detail label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Rule::ALL
            .into_iter()
            .find(|r| r.name() == s || r.label() == s)
            .ok_or_else(|| format!("Unknown rule: {}", s))
    }
}
