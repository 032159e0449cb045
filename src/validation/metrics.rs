//! Aggregate payroll metrics.
//!
//! Totals and averages are computed over the dataset directly. The error
//! count is taken from the fixed rules' checks so it always matches the
//! summary.

use rust_decimal::Decimal;

use crate::models::{Field, PayrollDataset, PayrollMetrics};

use super::rule_check::RuleCheck;

/// Computes the aggregate metrics for a dataset.
///
/// * `total_payroll` sums the `Net Pay` cells that hold a value, and is zero
///   when the column is absent.
/// * `avg_hours` is the mean of the `Hours Worked` cells that hold a value,
///   and is zero when the column is absent or has no values.
/// * `errors_found` adds up the affected counts of the fixed rules only.
///   A record flagged by two rules counts twice.
///
/// # Examples
///
/// ```
/// use payroll_validator::loader::DatasetLoader;
/// use payroll_validator::validation::compute_metrics;
/// use rust_decimal::Decimal;
///
/// let dataset = DatasetLoader::load_str("Hours Worked,Net Pay\n40,1000\n20,800\n").unwrap();
/// let metrics = compute_metrics(&dataset, &[]);
///
/// assert_eq!(metrics.total_employees, 2);
/// assert_eq!(metrics.total_payroll, Decimal::from(1800));
/// assert_eq!(metrics.avg_hours, Decimal::from(30));
/// assert_eq!(metrics.errors_found, 0);
/// ```
pub fn compute_metrics(dataset: &PayrollDataset, checks: &[RuleCheck]) -> PayrollMetrics {
    let total_payroll = if dataset.schema.contains(Field::NetPay) {
        dataset
            .records
            .iter()
            .filter_map(|r| r.decimal(Field::NetPay))
            .fold(Decimal::ZERO, |acc, v| acc.saturating_add(v))
    } else {
        Decimal::ZERO
    };

    let avg_hours = if dataset.schema.contains(Field::HoursWorked) {
        mean(
            dataset
                .records
                .iter()
                .filter_map(|r| r.decimal(Field::HoursWorked)),
        )
    } else {
        Decimal::ZERO
    };

    let errors_found = checks
        .iter()
        .filter(|c| c.rule.is_fixed())
        .map(RuleCheck::affected_count)
        .sum();

    PayrollMetrics {
        total_employees: dataset.len(),
        total_payroll,
        avg_hours,
        errors_found,
    }
}

/// Arithmetic mean; zero for an empty sequence.
fn mean(values: impl Iterator<Item = Decimal>) -> Decimal {
    let (sum, count) = values.fold((Decimal::ZERO, 0u64), |(sum, count), v| {
        (sum.saturating_add(v), count + 1)
    });

    if count == 0 {
        Decimal::ZERO
    } else {
        sum.checked_div(Decimal::from(count)).unwrap_or(Decimal::ZERO)
    }
}
