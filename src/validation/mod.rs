//! Validation logic for the Payroll Validator.
//!
//! This module contains the rule checks (negative hours worked, negative net
//! pay, duplicate employee IDs, and the policy-enabled missing critical data
//! and excessive hours checks), the aggregate metrics, and the
//! [`ValidationEngine`] that runs them in a fixed order.

mod duplicate_ids;
mod engine;
mod excessive_hours;
mod metrics;
mod missing_data;
mod negative_hours;
mod negative_net_pay;
mod rule_check;

pub use duplicate_ids::{check_duplicate_ids, find_duplicate_rows};
pub use engine::ValidationEngine;
pub use excessive_hours::check_excessive_hours;
pub use metrics::compute_metrics;
pub use missing_data::{EXPECTED_PRESENT, check_missing_critical_data};
pub use negative_hours::check_negative_hours;
pub use negative_net_pay::check_negative_net_pay;
pub use rule_check::RuleCheck;
