//! Validation result and violation types.

use serde::{Deserialize, Serialize};

/// Rule type reported when a required field is absent.
pub const RULE_REQUIRED: &str = "required";
/// Rule type reported when a string falls outside its length bounds.
pub const RULE_LENGTH: &str = "length";
/// Rule type reported when a submitted value cannot be parsed.
pub const RULE_FORMAT: &str = "format";

/// Aggregated result of evaluating all rules against one command.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<FieldViolation>,
}

impl ValidationResult {
    /// Build a result from collected violations.
    pub fn from_errors(errors: Vec<FieldViolation>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// Violations reported against `field`, in rule order.
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a FieldViolation> {
        self.errors.iter().filter(move |v| v.field == field)
    }
}

/// A single field-level rule violation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: String,
    pub rule_type: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
}

impl FieldViolation {
    pub fn new(field: &str, rule_type: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            rule_type: rule_type.to_string(),
            message: message.into(),
            value: None,
        }
    }

    /// Attach the attempted value to the violation.
    pub fn with_value(mut self, value: impl Into<serde_json::Value>) -> Self {
        self.value = Some(value.into());
        self
    }
}
