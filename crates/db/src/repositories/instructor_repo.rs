//! Repository for the `instructors` table.

use sqlx::PgPool;

use crate::models::instructor::InstructorRow;

const COLUMNS: &str = "id, last_name, first_mid_name, hire_date";

/// Read-only access to instructors.
pub struct InstructorRepo;

impl InstructorRepo {
    /// List all instructors, ordered by last name then first name.
    pub async fn list(pool: &PgPool) -> Result<Vec<InstructorRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM instructors ORDER BY last_name ASC, first_mid_name ASC"
        );
        sqlx::query_as::<_, InstructorRow>(&query)
            .fetch_all(pool)
            .await
    }
}
