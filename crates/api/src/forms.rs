//! Binding of submitted department data, for both the HTML form and the
//! JSON API.
//!
//! Browsers submit every field as text, and empty inputs arrive as empty
//! strings. JSON clients may send any value type. Binding turns blank or
//! null fields into `None` and unparseable ones into `format` violations,
//! leaving the required/length rules to the validator.

use campus_core::department::{
    CreateDepartment, ValidCreateDepartment, FIELD_ADMINISTRATOR, FIELD_BUDGET, FIELD_NAME,
    FIELD_START_DATE,
};
use campus_core::money::Money;
use campus_core::types::DbId;
use campus_core::validation::rules::RULE_FORMAT;
use campus_core::validation::FieldViolation;
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

/// Date format used by `<input type="date">` and for display.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw `application/x-www-form-urlencoded` body of the create form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DepartmentForm {
    pub name: String,
    pub budget: String,
    pub start_date: String,
    pub administrator_id: String,
}

impl DepartmentForm {
    /// Bind the submitted text into a command plus any parse failures.
    pub fn bind(&self) -> (CreateDepartment, Vec<FieldViolation>) {
        let mut errors = Vec::new();

        let name = non_blank(&self.name).map(str::to_string);
        let budget = parse_field(&self.budget, FIELD_BUDGET, "Budget", &mut errors, |s| {
            s.parse::<Money>().ok()
        });
        let start_date = parse_field(
            &self.start_date,
            FIELD_START_DATE,
            "Start Date",
            &mut errors,
            |s| NaiveDate::parse_from_str(s, DATE_FORMAT).ok(),
        );
        let administrator_id = parse_field(
            &self.administrator_id,
            FIELD_ADMINISTRATOR,
            "Administrator",
            &mut errors,
            |s| s.parse::<DbId>().ok(),
        );

        let command = CreateDepartment {
            name,
            budget,
            start_date,
            administrator_id,
        };
        (command, errors)
    }
}

/// Raw JSON body of `POST /api/v1/departments`.
///
/// Fields are kept as untyped JSON so a malformed value becomes a field
/// violation instead of rejecting the whole body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DepartmentPayload {
    pub name: Value,
    pub budget: Value,
    pub start_date: Value,
    pub administrator_id: Value,
}

impl DepartmentPayload {
    /// Bind the JSON values into a command plus any type mismatches.
    pub fn bind(&self) -> (CreateDepartment, Vec<FieldViolation>) {
        let mut errors = Vec::new();

        let command = CreateDepartment {
            name: json_field(&self.name, FIELD_NAME, "Name", &mut errors),
            budget: json_field(&self.budget, FIELD_BUDGET, "Budget", &mut errors),
            start_date: json_field(&self.start_date, FIELD_START_DATE, "Start Date", &mut errors),
            administrator_id: json_field(
                &self.administrator_id,
                FIELD_ADMINISTRATOR,
                "Administrator",
                &mut errors,
            ),
        };
        (command, errors)
    }
}

/// Validate a bound command, reporting binding failures alongside the
/// validator's own.
pub fn validate_bound(
    command: CreateDepartment,
    binding: Vec<FieldViolation>,
) -> Result<ValidCreateDepartment, Vec<FieldViolation>> {
    match command.validated() {
        Ok(valid) if binding.is_empty() => Ok(valid),
        Ok(_) => Err(binding),
        Err(validation) => Err(merge_violations(binding, validation)),
    }
}

/// Combine binding and validation failures, keeping only the binding error
/// for a field that failed to parse (its "must not be empty" would be noise).
pub fn merge_violations(
    binding: Vec<FieldViolation>,
    validation: Vec<FieldViolation>,
) -> Vec<FieldViolation> {
    let mut merged = binding;
    let rest: Vec<FieldViolation> = validation
        .into_iter()
        .filter(|v| !merged.iter().any(|b| b.field == v.field))
        .collect();
    merged.extend(rest);
    merged
}

fn non_blank(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

fn parse_field<T>(
    raw: &str,
    field: &str,
    label: &str,
    errors: &mut Vec<FieldViolation>,
    parse: impl FnOnce(&str) -> Option<T>,
) -> Option<T> {
    let value = non_blank(raw)?;
    let parsed = parse(value);
    if parsed.is_none() {
        errors.push(
            FieldViolation::new(
                field,
                RULE_FORMAT,
                format!("The value '{value}' is not valid for {label}."),
            )
            .with_value(value),
        );
    }
    parsed
}

fn json_field<T: DeserializeOwned>(
    value: &Value,
    field: &str,
    label: &str,
    errors: &mut Vec<FieldViolation>,
) -> Option<T> {
    if value.is_null() {
        return None;
    }
    match serde_json::from_value(value.clone()) {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            let shown = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            errors.push(
                FieldViolation::new(
                    field,
                    RULE_FORMAT,
                    format!("The value '{shown}' is not valid for {label}."),
                )
                .with_value(value.clone()),
            );
            None
        }
    }
}
