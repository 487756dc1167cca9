use crate::types::DbId;
use crate::validation::FieldViolation;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {}", summarize(.0))]
    Validation(Vec<FieldViolation>),

    /// The caller's cancellation token fired before the operation finished.
    #[error("Operation cancelled")]
    Cancelled,

    /// The store rejected or could not complete a write or read.
    #[error("Persistence error: {0}")]
    Persistence(String),
}

fn summarize(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| v.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::rules::RULE_REQUIRED;

    #[test]
    fn validation_display_joins_messages() {
        let err = CoreError::Validation(vec![
            FieldViolation::new("name", RULE_REQUIRED, "'Name' must not be empty."),
            FieldViolation::new("budget", RULE_REQUIRED, "'Budget' must not be empty."),
        ]);
        assert_eq!(
            err.to_string(),
            "Validation failed: 'Name' must not be empty.; 'Budget' must not be empty."
        );
    }
}
