//! Negative hours detection.
//!
//! Flags every record whose `Hours Worked` is below zero.

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{EXPECTED_POSITIVE, ErrorEntry, ObservedValue, PayrollDataset, Rule};

use super::rule_check::{RuleCheck, is_applicable};

/// Checks the dataset for negative hours worked.
///
/// Returns `None` when the `Hours Worked` column is absent. Empty cells are
/// never flagged.
///
/// # Examples
///
/// ```
/// use payroll_validator::loader::DatasetLoader;
/// use payroll_validator::validation::check_negative_hours;
///
/// let dataset = DatasetLoader::load_str("Employee ID,Hours Worked\n1,40\n2,-5\n").unwrap();
/// let check = check_negative_hours(&dataset).unwrap();
///
/// assert_eq!(check.affected_count(), 1);
/// assert_eq!(check.entries[0].employee_id, "2");
/// assert_eq!(check.entries[0].observed_value.to_string(), "-5");
/// ```
pub fn check_negative_hours(dataset: &PayrollDataset) -> Option<RuleCheck> {
    let rule = Rule::NegativeHoursWorked;
    if !is_applicable(rule, &dataset.schema) {
        debug!(rule = %rule, "Skipping rule: Hours Worked column absent");
        return None;
    }

    let entries: Vec<ErrorEntry> = dataset
        .records
        .iter()
        .filter_map(|record| {
            let hours = record.hours_worked?;
            (hours < Decimal::ZERO).then(|| {
                ErrorEntry::for_record(
                    record,
                    rule,
                    ObservedValue::Number(hours),
                    EXPECTED_POSITIVE,
                )
            })
        })
        .collect();

    debug!(rule = %rule, flagged = entries.len(), "Evaluated rule");
    Some(RuleCheck::new(rule, entries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Field, PayrollRecord, Schema};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn record(row: usize, id: &str, hours: Option<&str>) -> PayrollRecord {
        PayrollRecord {
            row_number: row,
            employee_id: Some(id.to_string()),
            hours_worked: hours.map(dec),
            ..Default::default()
        }
    }

    fn dataset(records: Vec<PayrollRecord>) -> PayrollDataset {
        PayrollDataset::new(Schema::new([Field::EmployeeId, Field::HoursWorked]), records)
    }

    #[test]
    fn test_flags_only_negative_hours() {
        let data = dataset(vec![
            record(1, "E001", Some("40")),
            record(2, "E002", Some("-5")),
            record(3, "E003", Some("0")),
            record(4, "E004", Some("-0.25")),
        ]);

        let check = check_negative_hours(&data).unwrap();
        assert_eq!(check.rule, Rule::NegativeHoursWorked);
        assert_eq!(check.affected_count(), 2);
        assert_eq!(check.entries[0].employee_id, "E002");
        assert_eq!(check.entries[1].employee_id, "E004");
        assert_eq!(
            check.entries[1].observed_value,
            ObservedValue::Number(dec("-0.25"))
        );
        assert_eq!(check.entries[1].expected_value, "Positive value");
    }

    #[test]
    fn test_zero_hours_is_not_flagged() {
        let data = dataset(vec![record(1, "E001", Some("0"))]);
        let check = check_negative_hours(&data).unwrap();
        assert!(check.violation().is_none());
    }

    #[test]
    fn test_empty_cell_is_not_flagged() {
        let data = dataset(vec![record(1, "E001", None)]);
        let check = check_negative_hours(&data).unwrap();
        assert_eq!(check.affected_count(), 0);
    }

    #[test]
    fn test_skipped_when_column_absent() {
        let data = PayrollDataset::new(
            Schema::new([Field::EmployeeId, Field::NetPay]),
            vec![record(1, "E001", None)],
        );
        assert!(check_negative_hours(&data).is_none());
    }
}
