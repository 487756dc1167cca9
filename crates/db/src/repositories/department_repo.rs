//! Repository for the `departments` table.

use campus_core::department::NewDepartment;
use campus_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::department::{DepartmentRow, DepartmentSummaryRow};

/// Column list shared across queries to avoid repetition. `budget` is
/// NUMERIC(19,2) in the table and read back as whole cents.
const COLUMNS: &str = "id, name, (budget * 100)::bigint AS budget, start_date, administrator_id, \
                       created_at, updated_at";

/// Provides insert and read operations for departments.
pub struct DepartmentRepo;

impl DepartmentRepo {
    /// Insert a new department, returning the generated id.
    ///
    /// Takes a connection so callers can run it inside a transaction.
    pub async fn create(conn: &mut PgConnection, input: &NewDepartment) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO departments (name, budget, start_date, administrator_id)
             VALUES ($1, $2::bigint::numeric / 100, $3, $4)
             RETURNING id",
        )
        .bind(&input.name)
        .bind(input.budget.cents())
        .bind(input.start_date)
        .bind(input.administrator_id)
        .fetch_one(conn)
        .await
    }

    /// Find a department by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<DepartmentRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM departments WHERE id = $1");
        sqlx::query_as::<_, DepartmentRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every department with its administrator's `Last, First` name,
    /// ordered by name ascending.
    pub async fn list_summaries(pool: &PgPool) -> Result<Vec<DepartmentSummaryRow>, sqlx::Error> {
        sqlx::query_as::<_, DepartmentSummaryRow>(
            "SELECT d.id, d.name, (d.budget * 100)::bigint AS budget, d.start_date, d.administrator_id,
                    i.last_name || ', ' || i.first_mid_name AS administrator_name
             FROM departments d
             LEFT JOIN instructors i ON i.id = d.administrator_id
             ORDER BY d.name ASC, d.id ASC",
        )
        .fetch_all(pool)
        .await
    }
}
