//! The validation engine.
//!
//! Runs every applicable rule over a dataset and assembles the summary,
//! detail rows and metrics into a [`ValidationOutcome`].

use tracing::{debug, info};

use crate::config::ValidationPolicy;
use crate::models::{PayrollDataset, ValidationOutcome, Violation};

use super::duplicate_ids::check_duplicate_ids;
use super::excessive_hours::check_excessive_hours;
use super::metrics::compute_metrics;
use super::missing_data::check_missing_critical_data;
use super::negative_hours::check_negative_hours;
use super::negative_net_pay::check_negative_net_pay;
use super::rule_check::RuleCheck;

/// Validates payroll datasets against the fixed rules and any optional rules
/// enabled by the policy.
///
/// The engine holds no mutable state; one instance can validate any number
/// of datasets, from any number of threads.
///
/// # Example
///
/// ```
/// use payroll_validator::loader::DatasetLoader;
/// use payroll_validator::models::{Rule, Severity};
/// use payroll_validator::validation::ValidationEngine;
///
/// let csv = "Employee ID,Hours Worked,Net Pay\n1,40,1000\n2,-5,800\n";
/// let dataset = DatasetLoader::load_str(csv).unwrap();
/// let outcome = ValidationEngine::default().validate(&dataset);
///
/// assert_eq!(outcome.summary.len(), 1);
/// assert_eq!(outcome.summary[0].rule, Rule::NegativeHoursWorked);
/// assert_eq!(outcome.summary[0].severity, Severity::High);
/// assert_eq!(outcome.details[0].employee_id, "2");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ValidationEngine {
    policy: ValidationPolicy,
}

impl ValidationEngine {
    /// Creates an engine with the given policy.
    pub fn new(policy: ValidationPolicy) -> Self {
        Self { policy }
    }

    /// Returns the engine's policy.
    pub fn policy(&self) -> &ValidationPolicy {
        &self.policy
    }

    /// Evaluates every applicable rule, in rule order.
    ///
    /// Rules whose columns are absent are left out of the result.
    pub fn run_checks(&self, dataset: &PayrollDataset) -> Vec<RuleCheck> {
        let mut checks = Vec::new();
        checks.extend(check_negative_hours(dataset));
        checks.extend(check_negative_net_pay(dataset));
        checks.extend(check_duplicate_ids(dataset));

        if let Some(missing) = &self.policy.missing_critical_data {
            checks.extend(check_missing_critical_data(dataset, missing));
        }
        if let Some(overtime) = &self.policy.overtime {
            checks.extend(check_excessive_hours(dataset, overtime));
        }

        checks
    }

    /// Validates a dataset.
    ///
    /// The result depends only on the dataset and the policy: running the
    /// same dataset twice yields identical outcomes.
    pub fn validate(&self, dataset: &PayrollDataset) -> ValidationOutcome {
        let checks = self.run_checks(dataset);
        debug!(
            applicable_rules = checks.len(),
            records = dataset.len(),
            "Rules evaluated"
        );

        let metrics = compute_metrics(dataset, &checks);
        let summary: Vec<Violation> = checks.iter().filter_map(RuleCheck::violation).collect();
        let details = checks.into_iter().flat_map(|c| c.entries).collect();

        let outcome = ValidationOutcome {
            metrics,
            summary,
            details,
        };

        info!(
            records = outcome.metrics.total_employees,
            errors_found = outcome.metrics.errors_found,
            violated_rules = outcome.summary.len(),
            "Validation completed"
        );

        outcome
    }
}
