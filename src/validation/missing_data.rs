//! Missing critical data detection.
//!
//! Enabled through [`MissingDataPolicy`]. A record is flagged when any
//! configured critical column that exists in the input has an empty cell.
//! Critical columns absent from the input are not checked at all.

use tracing::debug;

use crate::config::MissingDataPolicy;
use crate::models::{ErrorEntry, Field, ObservedValue, PayrollDataset, Rule};

use super::rule_check::RuleCheck;

/// Expected-value text for the missing data check.
pub const EXPECTED_PRESENT: &str = "Value present";

/// Checks the dataset for empty critical cells.
///
/// Returns `None` when none of the critical columns is present.
///
/// # Examples
///
/// ```
/// use payroll_validator::config::MissingDataPolicy;
/// use payroll_validator::loader::DatasetLoader;
/// use payroll_validator::models::Field;
/// use payroll_validator::validation::check_missing_critical_data;
///
/// let policy = MissingDataPolicy {
///     critical_fields: vec![Field::EmployeeId, Field::NetPay],
/// };
/// let dataset = DatasetLoader::load_str("Employee ID,Net Pay\n1,100\n,\n").unwrap();
/// let check = check_missing_critical_data(&dataset, &policy).unwrap();
///
/// assert_eq!(check.affected_count(), 1);
/// assert_eq!(
///     check.entries[0].observed_value.to_string(),
///     "Missing: Employee ID, Net Pay"
/// );
/// ```
pub fn check_missing_critical_data(
    dataset: &PayrollDataset,
    policy: &MissingDataPolicy,
) -> Option<RuleCheck> {
    let rule = Rule::MissingCriticalData;

    let checked: Vec<Field> = dataset
        .schema
        .fields()
        .filter(|f| policy.critical_fields.contains(f))
        .collect();

    if checked.is_empty() {
        debug!(rule = %rule, "Skipping rule: no critical column present");
        return None;
    }

    let entries: Vec<ErrorEntry> = dataset
        .records
        .iter()
        .filter_map(|record| {
            let missing: Vec<&str> = checked
                .iter()
                .filter(|f| !record.has_value(**f))
                .map(|f| f.header())
                .collect();
            (!missing.is_empty()).then(|| {
                ErrorEntry::for_record(
                    record,
                    rule,
                    ObservedValue::Label(format!("Missing: {}", missing.join(", "))),
                    EXPECTED_PRESENT,
                )
            })
        })
        .collect();

    debug!(rule = %rule, flagged = entries.len(), "Evaluated rule");
    Some(RuleCheck::new(rule, entries))
}
