//! Department row models.

use campus_core::department::{Department, DepartmentSummary};
use campus_core::money::Money;
use campus_core::types::{DbId, Timestamp};
use chrono::NaiveDate;
use sqlx::FromRow;

/// A row from the `departments` table.
#[derive(Debug, Clone, FromRow)]
pub struct DepartmentRow {
    pub id: DbId,
    pub name: String,
    /// Whole cents.
    pub budget: i64,
    pub start_date: NaiveDate,
    pub administrator_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<DepartmentRow> for Department {
    fn from(row: DepartmentRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            budget: Money::from_cents(row.budget),
            start_date: row.start_date,
            administrator_id: row.administrator_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// A `departments` row joined with its administrator's display name.
#[derive(Debug, Clone, FromRow)]
pub struct DepartmentSummaryRow {
    pub id: DbId,
    pub name: String,
    pub budget: i64,
    pub start_date: NaiveDate,
    pub administrator_id: Option<DbId>,
    pub administrator_name: Option<String>,
}

impl From<DepartmentSummaryRow> for DepartmentSummary {
    fn from(row: DepartmentSummaryRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            budget: Money::from_cents(row.budget),
            start_date: row.start_date,
            administrator_id: row.administrator_id,
            administrator_name: row.administrator_name,
        }
    }
}
