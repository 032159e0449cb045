//! Validation policy types.
//!
//! These types map directly onto the policy YAML file. Every section is
//! optional; an empty file yields the default policy, which runs only the
//! fixed rules.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::Field;

/// Settings controlling which optional rules the engine runs.
///
/// # Example
///
/// ```
/// use payroll_validator::config::ValidationPolicy;
///
/// let policy: ValidationPolicy = serde_yaml::from_str("overtime:\n  max_hours: 60\n").unwrap();
/// assert!(policy.overtime.is_some());
/// assert!(policy.missing_critical_data.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ValidationPolicy {
    /// Enables the missing critical data rule.
    #[serde(default)]
    pub missing_critical_data: Option<MissingDataPolicy>,
    /// Enables the excessive hours rule.
    #[serde(default)]
    pub overtime: Option<OvertimePolicy>,
}

/// Columns that must carry a value in every record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MissingDataPolicy {
    /// Critical columns, by header name.
    pub critical_fields: Vec<Field>,
}

/// Ceiling on hours worked in a pay period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OvertimePolicy {
    /// Records with more hours than this are flagged.
    pub max_hours: Decimal,
}

impl ValidationPolicy {
    /// Checks that enabled sections hold usable settings.
    pub fn validate(&self) -> EngineResult<()> {
        if let Some(missing) = &self.missing_critical_data
            && missing.critical_fields.is_empty()
        {
            return Err(EngineError::InvalidPolicy {
                setting: "missing_critical_data.critical_fields".to_string(),
                message: "must list at least one field".to_string(),
            });
        }

        if let Some(overtime) = &self.overtime
            && overtime.max_hours <= Decimal::ZERO
        {
            return Err(EngineError::InvalidPolicy {
                setting: "overtime.max_hours".to_string(),
                message: format!("must be greater than zero, got {}", overtime.max_hours),
            });
        }

        Ok(())
    }

    /// Returns true if no optional rule is enabled.
    pub fn is_default(&self) -> bool {
        self.missing_critical_data.is_none() && self.overtime.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_default_policy() {
        let policy: ValidationPolicy = serde_yaml::from_str("{}").unwrap();
        assert!(policy.is_default());
        assert!(policy.validate().is_ok());
    }

    #[test]
    fn test_deserialize_full_policy() {
        let yaml = r#"
missing_critical_data:
  critical_fields: ["Employee ID", "Net Pay"]
overtime:
  max_hours: 60
"#;
        let policy: ValidationPolicy = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            policy.missing_critical_data.unwrap().critical_fields,
            vec![Field::EmployeeId, Field::NetPay]
        );
        assert_eq!(policy.overtime.unwrap().max_hours, Decimal::from(60));
    }

    #[test]
    fn test_unknown_field_name_is_rejected() {
        let yaml = "missing_critical_data:\n  critical_fields: [\"Salary\"]\n";
        assert!(serde_yaml::from_str::<ValidationPolicy>(yaml).is_err());
    }

    #[test]
    fn test_unknown_section_is_rejected() {
        assert!(serde_yaml::from_str::<ValidationPolicy>("bonus_cap: 3\n").is_err());
    }

    #[test]
    fn test_empty_critical_fields_is_invalid() {
        let policy = ValidationPolicy {
            missing_critical_data: Some(MissingDataPolicy {
                critical_fields: vec![],
            }),
            overtime: None,
        };
        match policy.validate() {
            Err(EngineError::InvalidPolicy { setting, .. }) => {
                assert_eq!(setting, "missing_critical_data.critical_fields");
            }
            other => panic!("Expected InvalidPolicy, got {:?}", other),
        }
    }

    #[test]
    fn test_non_positive_threshold_is_invalid() {
        let policy = ValidationPolicy {
            missing_critical_data: None,
            overtime: Some(OvertimePolicy {
                max_hours: Decimal::ZERO,
            }),
        };
        assert!(matches!(
            policy.validate(),
            Err(EngineError::InvalidPolicy { .. })
        ));
    }
}
