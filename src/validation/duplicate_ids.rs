//! Duplicate employee ID detection.
//!
//! Every record whose `Employee ID` is shared with at least one other record
//! is flagged, the first occurrence included. Records without an ID never
//! take part in a duplicate group.

use std::collections::HashMap;

use tracing::debug;

use crate::models::{
    DUPLICATE_ENTRY, EXPECTED_UNIQUE_ID, ErrorEntry, ObservedValue, PayrollDataset, Rule,
};

use super::rule_check::{RuleCheck, is_applicable};

/// Returns the indexes of records whose ID occurs more than once, in
/// dataset order.
///
/// # Examples
///
/// ```
/// use payroll_validator::loader::DatasetLoader;
/// use payroll_validator::validation::find_duplicate_rows;
///
/// let dataset = DatasetLoader::load_str("Employee ID\n7\n8\n7\n\n").unwrap();
/// assert_eq!(find_duplicate_rows(&dataset), vec![0, 2]);
/// ```
pub fn find_duplicate_rows(dataset: &PayrollDataset) -> Vec<usize> {
    let mut counts: HashMap<&str, usize> = HashMap::with_capacity(dataset.len());
    for id in dataset
        .records
        .iter()
        .filter_map(|r| r.employee_id.as_deref())
    {
        *counts.entry(id).or_insert(0) += 1;
    }

    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, record)| {
            record
                .employee_id
                .as_deref()
                .is_some_and(|id| counts.get(id).copied().unwrap_or(0) > 1)
        })
        .map(|(index, _)| index)
        .collect()
}

/// Checks the dataset for employee IDs used by more than one record.
///
/// Returns `None` when the `Employee ID` column is absent.
///
/// # Examples
///
/// ```
/// use payroll_validator::loader::DatasetLoader;
/// use payroll_validator::validation::check_duplicate_ids;
///
/// let dataset = DatasetLoader::load_str("Employee ID,Employee Name\n7,Ann\n7,Ben\n9,Cy\n").unwrap();
/// let check = check_duplicate_ids(&dataset).unwrap();
///
/// assert_eq!(check.affected_count(), 2);
/// assert!(check.entries.iter().all(|e| e.employee_id == "7"));
/// ```
pub fn check_duplicate_ids(dataset: &PayrollDataset) -> Option<RuleCheck> {
    let rule = Rule::DuplicateEmployeeIds;
    if !is_applicable(rule, &dataset.schema) {
        debug!(rule = %rule, "Skipping rule: Employee ID column absent");
        return None;
    }

    let entries: Vec<ErrorEntry> = find_duplicate_rows(dataset)
        .into_iter()
        .map(|index| {
            ErrorEntry::for_record(
                &dataset.records[index],
                rule,
                ObservedValue::Label(DUPLICATE_ENTRY.to_string()),
                EXPECTED_UNIQUE_ID,
            )
        })
        .collect();

    debug!(rule = %rule, flagged = entries.len(), "Evaluated rule");
    Some(RuleCheck::new(rule, entries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Field, PayrollRecord, Schema};

    fn record(row: usize, id: Option<&str>) -> PayrollRecord {
        PayrollRecord {
            row_number: row,
            employee_id: id.map(str::to_string),
            employee_name: Some(format!("Employee {}", row)),
            ..Default::default()
        }
    }

    fn dataset(ids: &[Option<&str>]) -> PayrollDataset {
        let records = ids
            .iter()
            .enumerate()
            .map(|(i, id)| record(i + 1, *id))
            .collect();
        PayrollDataset::new(Schema::new([Field::EmployeeId, Field::EmployeeName]), records)
    }

    #[test]
    fn test_all_occurrences_are_flagged() {
        let data = dataset(&[Some("7"), Some("1"), Some("7"), Some("7")]);
        let check = check_duplicate_ids(&data).unwrap();

        assert_eq!(check.affected_count(), 3);
        let rows: Vec<usize> = check.entries.iter().map(|e| e.row_number).collect();
        assert_eq!(rows, vec![1, 3, 4]);
        for entry in &check.entries {
            assert_eq!(entry.employee_id, "7");
            assert_eq!(entry.observed_value.to_string(), "Duplicate Entry");
            assert_eq!(entry.expected_value, "Unique ID");
        }
    }

    #[test]
    fn test_multiple_groups_keep_row_order() {
        let data = dataset(&[Some("A"), Some("B"), Some("A"), Some("B"), Some("C")]);
        assert_eq!(find_duplicate_rows(&data), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_ids_compare_as_exact_text() {
        let data = dataset(&[Some("7"), Some("7.0"), Some("007"), Some("7")]);
        assert_eq!(find_duplicate_rows(&data), vec![0, 3]);

        let data = dataset(&[Some("E1"), Some("e1")]);
        assert!(find_duplicate_rows(&data).is_empty());
    }

    #[test]
    fn test_unique_ids_produce_no_violation() {
        let data = dataset(&[Some("1"), Some("2"), Some("3")]);
        let check = check_duplicate_ids(&data).unwrap();
        assert!(check.violation().is_none());
    }

    #[test]
    fn test_missing_ids_do_not_collide() {
        let data = dataset(&[None, None, Some("1")]);
        let check = check_duplicate_ids(&data).unwrap();
        assert_eq!(check.affected_count(), 0);
    }

    #[test]
    fn test_skipped_when_column_absent() {
        let data = PayrollDataset::new(Schema::new([Field::NetPay]), vec![record(1, None)]);
        assert!(check_duplicate_ids(&data).is_none());
    }
}
