//! Validation policy loading for the Payroll Validator.
//!
//! The policy enables the optional rules (missing critical data and
//! excessive hours). Without a policy file only the fixed rules run.
//!
//! # Example
//!
//! ```no_run
//! use payroll_validator::config::PolicyLoader;
//!
//! let loader = PolicyLoader::load("./config/policy.yaml").unwrap();
//! println!("Optional rules enabled: {}", !loader.policy().is_default());
//! ```

mod loader;
mod types;

pub use loader::PolicyLoader;
pub use types::{MissingDataPolicy, OvertimePolicy, ValidationPolicy};
