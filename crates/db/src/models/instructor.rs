//! Instructor row model.

use campus_core::instructor::Instructor;
use campus_core::types::DbId;
use chrono::NaiveDate;
use sqlx::FromRow;

/// A row from the `instructors` table (timestamps omitted).
#[derive(Debug, Clone, FromRow)]
pub struct InstructorRow {
    pub id: DbId,
    pub last_name: String,
    pub first_mid_name: String,
    pub hire_date: NaiveDate,
}

impl From<InstructorRow> for Instructor {
    fn from(row: InstructorRow) -> Self {
        Self {
            id: row.id,
            last_name: row.last_name,
            first_mid_name: row.first_mid_name,
            hire_date: row.hire_date,
        }
    }
}
