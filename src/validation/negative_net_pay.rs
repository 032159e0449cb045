//! Negative net pay detection.
//!
//! Flags every record whose `Net Pay` is below zero. The observed value is
//! reported as a currency amount with two decimal places.

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{EXPECTED_POSITIVE, ErrorEntry, ObservedValue, PayrollDataset, Rule};

use super::rule_check::{RuleCheck, is_applicable};

/// Checks the dataset for negative net pay.
///
/// Returns `None` when the `Net Pay` column is absent.
///
/// # Examples
///
/// ```
/// use payroll_validator::loader::DatasetLoader;
/// use payroll_validator::validation::check_negative_net_pay;
///
/// let dataset = DatasetLoader::load_str("Employee ID,Net Pay\n1,1000\n2,-12.5\n").unwrap();
/// let check = check_negative_net_pay(&dataset).unwrap();
///
/// assert_eq!(check.affected_count(), 1);
/// assert_eq!(check.entries[0].observed_value.to_string(), "$-12.50");
/// ```
pub fn check_negative_net_pay(dataset: &PayrollDataset) -> Option<RuleCheck> {
    let rule = Rule::NegativeNetPay;
    if !is_applicable(rule, &dataset.schema) {
        debug!(rule = %rule, "Skipping rule: Net Pay column absent");
        return None;
    }

    let entries: Vec<ErrorEntry> = dataset
        .records
        .iter()
        .filter_map(|record| {
            let net_pay = record.net_pay?;
            (net_pay < Decimal::ZERO).then(|| {
                ErrorEntry::for_record(
                    record,
                    rule,
                    ObservedValue::Currency(net_pay),
                    EXPECTED_POSITIVE,
                )
            })
        })
        .collect();

    debug!(rule = %rule, flagged = entries.len(), "Evaluated rule");
    Some(RuleCheck::new(rule, entries))
}
