//! Validation outcome models.
//!
//! [`ValidationOutcome`] is the complete result of one engine run: the
//! aggregate [`PayrollMetrics`], the per-rule summary and the detail rows.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{ErrorEntry, Rule, Violation};

/// Aggregate figures computed directly over the dataset.
///
/// These are independent of whether any rule matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollMetrics {
    /// Number of records.
    pub total_employees: usize,
    /// Sum of `Net Pay`; zero when the column is absent.
    pub total_payroll: Decimal,
    /// Mean of `Hours Worked`; zero when the column is absent or empty.
    pub avg_hours: Decimal,
    /// Records flagged by the fixed rules, counted once per rule.
    pub errors_found: usize,
}

/// Everything one validation run produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    /// Aggregate metrics.
    pub metrics: PayrollMetrics,
    /// One row per rule that matched, in rule order.
    pub summary: Vec<Violation>,
    /// One row per (record, rule) match, in rule order then row order.
    pub details: Vec<ErrorEntry>,
}

impl ValidationOutcome {
    /// Returns true if no rule matched any record.
    pub fn is_clean(&self) -> bool {
        self.summary.is_empty()
    }

    /// Returns the summary row for a rule, if it matched.
    pub fn violation(&self, rule: Rule) -> Option<&Violation> {
        self.summary.iter().find(|v| v.rule == rule)
    }

    /// Returns the detail rows produced by a rule.
    pub fn entries_for(&self, rule: Rule) -> impl Iterator<Item = &ErrorEntry> {
        self.details.iter().filter(move |e| e.rule == rule)
    }

    /// Returns the total number of detail rows across every rule, including
    /// policy-enabled ones.
    pub fn total_findings(&self) -> usize {
        self.summary.iter().map(|v| v.affected_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ObservedValue, PayrollRecord};

    fn outcome_with(summary: Vec<Violation>, details: Vec<ErrorEntry>) -> ValidationOutcome {
        ValidationOutcome {
            metrics: PayrollMetrics {
                total_employees: 0,
                total_payroll: Decimal::ZERO,
                avg_hours: Decimal::ZERO,
                errors_found: 0,
            },
            summary,
            details,
        }
    }

    #[test]
    fn test_empty_outcome_is_clean() {
        let outcome = outcome_with(vec![], vec![]);
        assert!(outcome.is_clean());
        assert_eq!(outcome.total_findings(), 0);
        assert!(outcome.violation(Rule::NegativeNetPay).is_none());
    }

    #[test]
    fn test_entries_for_filters_by_rule() {
        let record = PayrollRecord {
            row_number: 1,
            ..Default::default()
        };
        let details = vec![
            ErrorEntry::for_record(
                &record,
                Rule::NegativeHoursWorked,
                ObservedValue::Number(Decimal::NEGATIVE_ONE),
                "Positive value",
            ),
            ErrorEntry::for_record(
                &record,
                Rule::DuplicateEmployeeIds,
                ObservedValue::Label("Duplicate Entry".to_string()),
                "Unique ID",
            ),
        ];
        let summary = vec![
            Violation::new(Rule::NegativeHoursWorked, 1),
            Violation::new(Rule::DuplicateEmployeeIds, 1),
        ];
        let outcome = outcome_with(summary, details);

        assert!(!outcome.is_clean());
        assert_eq!(outcome.entries_for(Rule::DuplicateEmployeeIds).count(), 1);
        assert_eq!(outcome.entries_for(Rule::NegativeNetPay).count(), 0);
        assert_eq!(outcome.total_findings(), 2);
    }
}
