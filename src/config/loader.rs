//! Policy loading functionality.
//!
//! This module provides the [`PolicyLoader`] type for loading a
//! [`ValidationPolicy`] from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::ValidationPolicy;

/// Loads and provides access to the validation policy.
///
/// # File Format
///
/// ```text
/// missing_critical_data:
///   critical_fields: ["Employee ID", "Hours Worked", "Net Pay"]
/// overtime:
///   max_hours: 60
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_validator::config::PolicyLoader;
///
/// let loader = PolicyLoader::load("./config/policy.yaml")?;
/// println!("Overtime check enabled: {}", loader.policy().overtime.is_some());
/// # Ok::<(), payroll_validator::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct PolicyLoader {
    policy: ValidationPolicy,
}

impl PolicyLoader {
    /// Loads the policy from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `PolicyLoader` on success, or an error if:
    /// - The file is missing
    /// - The file contains invalid YAML or unknown settings
    /// - An enabled section holds an unusable value
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let policy = Self::parse(&content).map_err(|e| match e {
            EngineError::ConfigParseError { message, .. } => EngineError::ConfigParseError {
                path: path_str.clone(),
                message,
            },
            other => other,
        })?;

        debug!(path = %path_str, ?policy, "Loaded validation policy");
        Ok(Self { policy })
    }

    /// Parses a policy from YAML text.
    pub fn parse(content: &str) -> EngineResult<ValidationPolicy> {
        // An empty document means "no optional rules".
        if content.trim().is_empty() {
            return Ok(ValidationPolicy::default());
        }

        let policy: ValidationPolicy =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            })?;
        policy.validate()?;
        Ok(policy)
    }

    /// Returns the loaded policy.
    pub fn policy(&self) -> &ValidationPolicy {
        &self.policy
    }

    /// Consumes the loader, returning the policy.
    pub fn into_policy(self) -> ValidationPolicy {
        self.policy
    }
}
