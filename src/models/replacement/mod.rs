// Replacement module
// Ordered literal find/replace rules for event names

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// One literal substitution applied to event summaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplacementRule {
    pub find: String,
    pub replace: String,
}

impl ReplacementRule {
    pub fn new(find: impl Into<String>, replace: impl Into<String>) -> Self {
        Self {
            find: find.into(),
            replace: replace.into(),
        }
    }
}

/// A validated, ordered list of replacement rules.
///
/// Rules run in sequence against the current value of the text, so a later
/// rule can match what an earlier one produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplacementTable {
    rules: Vec<ReplacementRule>,
}

impl ReplacementTable {
    /// Build a table, rejecting rules with an empty find string
    pub fn new(rules: Vec<ReplacementRule>) -> Result<Self, ConfigError> {
        if let Some(index) = rules.iter().position(|rule| rule.find.is_empty()) {
            return Err(ConfigError::EmptyFind { index });
        }

        Ok(Self { rules })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn rules(&self) -> &[ReplacementRule] {
        &self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn apply(&self, text: &str) -> String {
        self.rules
            .iter()
            .fold(text.to_string(), |current, rule| {
                current.replace(&rule.find, &rule.replace)
            })
    }
}
