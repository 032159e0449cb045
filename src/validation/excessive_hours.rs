//! Excessive hours (overtime ceiling) detection.
//!
//! Enabled through [`OvertimePolicy`]. There is no built-in ceiling: the
//! threshold always comes from the policy file.

use tracing::debug;

use crate::config::OvertimePolicy;
use crate::models::{ErrorEntry, ObservedValue, PayrollDataset, Rule};

use super::rule_check::{RuleCheck, is_applicable};

/// Checks the dataset for hours above the configured ceiling.
///
/// Returns `None` when the `Hours Worked` column is absent. Hours equal to
/// the ceiling are allowed.
///
/// # Examples
///
/// ```
/// use payroll_validator::config::OvertimePolicy;
/// use payroll_validator::loader::DatasetLoader;
/// use payroll_validator::validation::check_excessive_hours;
/// use rust_decimal::Decimal;
///
/// let policy = OvertimePolicy { max_hours: Decimal::from(60) };
/// let dataset = DatasetLoader::load_str("Employee ID,Hours Worked\n1,60\n2,72.5\n").unwrap();
/// let check = check_excessive_hours(&dataset, &policy).unwrap();
///
/// assert_eq!(check.affected_count(), 1);
/// assert_eq!(check.entries[0].expected_value, "At most 60 hours");
/// ```
pub fn check_excessive_hours(
    dataset: &PayrollDataset,
    policy: &OvertimePolicy,
) -> Option<RuleCheck> {
    let rule = Rule::ExcessiveHours;
    if !is_applicable(rule, &dataset.schema) {
        debug!(rule = %rule, "Skipping rule: Hours Worked column absent");
        return None;
    }

    let expected = format!("At most {} hours", policy.max_hours.normalize());
    let entries: Vec<ErrorEntry> = dataset
        .records
        .iter()
        .filter_map(|record| {
            let hours = record.hours_worked?;
            (hours > policy.max_hours).then(|| {
                ErrorEntry::for_record(record, rule, ObservedValue::Number(hours), &*expected)
            })
        })
        .collect();

    debug!(
        rule = %rule,
        max_hours = %policy.max_hours,
        flagged = entries.len(),
        "Evaluated rule"
    );
    Some(RuleCheck::new(rule, entries))
}
