//! The result of evaluating one rule.

use serde::{Deserialize, Serialize};

use crate::models::{ErrorEntry, Rule, Schema, Violation};

/// Entries produced by one applicable rule.
///
/// A rule that is not applicable produces no `RuleCheck` at all; an
/// applicable rule that matched nothing produces one with no entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleCheck {
    /// The rule that was evaluated.
    pub rule: Rule,
    /// One entry per flagged record, in dataset order.
    pub entries: Vec<ErrorEntry>,
}

impl RuleCheck {
    /// Creates a check result.
    pub fn new(rule: Rule, entries: Vec<ErrorEntry>) -> Self {
        Self { rule, entries }
    }

    /// Number of records the rule flagged.
    pub fn affected_count(&self) -> usize {
        self.entries.len()
    }

    /// Returns the summary row, or `None` if nothing was flagged.
    pub fn violation(&self) -> Option<Violation> {
        if self.entries.is_empty() {
            None
        } else {
            Some(Violation::new(self.rule, self.entries.len()))
        }
    }
}

/// Returns true if every column the rule inspects is present.
pub(crate) fn is_applicable(rule: Rule, schema: &Schema) -> bool {
    schema.contains_all(rule.required_fields())
}
