//! Department creation: command, validator, mapping rule, and handler.
//!
//! The flow is bind -> [`CreateDepartment::validated`] -> dispatch a
//! [`ValidCreateDepartment`] to [`CreateDepartmentHandler`] -> map to
//! [`NewDepartment`] -> insert. Only validated commands can be dispatched.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;
use validator::ValidateLength;

use crate::command::{Command, CommandHandler};
use crate::error::CoreError;
use crate::money::Money;
use crate::store::DepartmentStore;
use crate::types::{DbId, Timestamp};
use crate::validation::rules::{RULE_LENGTH, RULE_REQUIRED};
use crate::validation::{FieldViolation, ValidationResult};

pub const NAME_MIN_LEN: u64 = 3;
pub const NAME_MAX_LEN: u64 = 50;

pub const FIELD_NAME: &str = "name";
pub const FIELD_BUDGET: &str = "budget";
pub const FIELD_START_DATE: &str = "start_date";
pub const FIELD_ADMINISTRATOR: &str = "administrator_id";

// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

/// User input for a new department, exactly as submitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateDepartment {
    pub name: Option<String>,
    pub budget: Option<Money>,
    pub start_date: Option<NaiveDate>,
    /// The instructor who administers the department.
    pub administrator_id: Option<DbId>,
}

impl CreateDepartment {
    pub fn validate(&self) -> ValidationResult {
        validate_create_department(self)
    }

    /// Consume the command, returning the dispatchable form or every
    /// violation found.
    pub fn validated(self) -> Result<ValidCreateDepartment, Vec<FieldViolation>> {
        let result = self.validate();
        if !result.is_valid {
            return Err(result.errors);
        }
        match (self.name, self.budget, self.start_date, self.administrator_id) {
            (Some(name), Some(budget), Some(start_date), Some(administrator_id)) => {
                Ok(ValidCreateDepartment {
                    name,
                    budget,
                    start_date,
                    administrator_id,
                })
            }
            _ => Err(result.errors),
        }
    }
}

/// A [`CreateDepartment`] that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidCreateDepartment {
    name: String,
    budget: Money,
    start_date: NaiveDate,
    administrator_id: DbId,
}

impl ValidCreateDepartment {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn budget(&self) -> Money {
        self.budget
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn administrator_id(&self) -> DbId {
        self.administrator_id
    }
}

impl Command for ValidCreateDepartment {
    type Output = DbId;
}

// ---------------------------------------------------------------------------
// Validator
// ---------------------------------------------------------------------------

/// Evaluate every rule for a department command. Rules are independent and
/// never short-circuit.
pub fn validate_create_department(command: &CreateDepartment) -> ValidationResult {
    let mut errors = Vec::new();

    match &command.name {
        None => errors.push(required(FIELD_NAME, "Name")),
        Some(name) if name.trim().is_empty() => errors.push(required(FIELD_NAME, "Name")),
        Some(name) if !name.validate_length(Some(NAME_MIN_LEN), Some(NAME_MAX_LEN), None) => {
            errors.push(
                FieldViolation::new(
                    FIELD_NAME,
                    RULE_LENGTH,
                    format!(
                        "'Name' must be between {NAME_MIN_LEN} and {NAME_MAX_LEN} characters. \
                         You entered {} characters.",
                        name.chars().count()
                    ),
                )
                .with_value(name.as_str()),
            );
        }
        Some(_) => {}
    }

    if command.budget.is_none() {
        errors.push(required(FIELD_BUDGET, "Budget"));
    }
    if command.start_date.is_none() {
        errors.push(required(FIELD_START_DATE, "Start Date"));
    }
    if command.administrator_id.is_none() {
        errors.push(required(FIELD_ADMINISTRATOR, "Administrator"));
    }

    ValidationResult::from_errors(errors)
}

fn required(field: &str, label: &str) -> FieldViolation {
    FieldViolation::new(field, RULE_REQUIRED, format!("'{label}' must not be empty."))
}

// ---------------------------------------------------------------------------
// Entities
// ---------------------------------------------------------------------------

/// Insert shape for a department. The id is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDepartment {
    pub name: String,
    pub budget: Money,
    pub start_date: NaiveDate,
    pub administrator_id: DbId,
}

impl From<ValidCreateDepartment> for NewDepartment {
    fn from(command: ValidCreateDepartment) -> Self {
        let ValidCreateDepartment {
            name,
            budget,
            start_date,
            administrator_id,
        } = command;
        Self {
            name,
            budget,
            start_date,
            administrator_id,
        }
    }
}

/// A persisted department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub id: DbId,
    pub name: String,
    pub budget: Money,
    pub start_date: NaiveDate,
    /// `None` once the administrating instructor has been removed.
    pub administrator_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Listing row: a department plus its administrator's display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentSummary {
    pub id: DbId,
    pub name: String,
    pub budget: Money,
    pub start_date: NaiveDate,
    pub administrator_id: Option<DbId>,
    pub administrator_name: Option<String>,
}

// ---------------------------------------------------------------------------
// Handler
// ---------------------------------------------------------------------------

/// Maps a validated command to a [`NewDepartment`] and persists it.
pub struct CreateDepartmentHandler {
    store: Arc<dyn DepartmentStore>,
}

impl CreateDepartmentHandler {
    pub fn new(store: Arc<dyn DepartmentStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CommandHandler<ValidCreateDepartment> for CreateDepartmentHandler {
    async fn handle(
        &self,
        command: ValidCreateDepartment,
        cancel: CancellationToken,
    ) -> Result<DbId, CoreError> {
        let department = NewDepartment::from(command);
        let name = department.name.clone();

        if cancel.is_cancelled() {
            tracing::warn!(name = %name, "Department creation cancelled before dispatch");
            return Err(CoreError::Cancelled);
        }

        // A finished insert is reported even if cancellation fired in the
        // same poll: the row is committed at that point.
        tokio::select! {
            biased;
            result = self.store.insert(department) => {
                let id = result?;
                tracing::info!(department_id = id, name = %name, "Department created");
                Ok(id)
            }
            () = cancel.cancelled() => {
                tracing::warn!(name = %name, "Department creation cancelled before commit");
                Err(CoreError::Cancelled)
            }
        }
    }
}
