//! PostgreSQL implementation of the `campus-core` store ports.

use async_trait::async_trait;
use campus_core::department::{Department, DepartmentSummary, NewDepartment};
use campus_core::error::CoreError;
use campus_core::instructor::Instructor;
use campus_core::store::{DepartmentStore, InstructorDirectory};
use campus_core::types::DbId;

use crate::repositories::{DepartmentRepo, InstructorRepo};
use crate::DbPool;

/// Store adapter backed by a shared connection pool.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DepartmentStore for PgStore {
    /// Runs the insert in its own transaction. If this future is dropped
    /// before `commit` resolves, the transaction is rolled back on drop.
    async fn insert(&self, department: NewDepartment) -> Result<DbId, CoreError> {
        let mut tx = self.pool.begin().await.map_err(persistence_error)?;
        let id = DepartmentRepo::create(&mut *tx, &department)
            .await
            .map_err(persistence_error)?;
        tx.commit().await.map_err(persistence_error)?;
        Ok(id)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Department>, CoreError> {
        let row = DepartmentRepo::find_by_id(&self.pool, id)
            .await
            .map_err(persistence_error)?;
        Ok(row.map(Department::from))
    }

    async fn list_summaries(&self) -> Result<Vec<DepartmentSummary>, CoreError> {
        let rows = DepartmentRepo::list_summaries(&self.pool)
            .await
            .map_err(persistence_error)?;
        Ok(rows.into_iter().map(DepartmentSummary::from).collect())
    }
}

#[async_trait]
impl InstructorDirectory for PgStore {
    async fn list_instructors(&self) -> Result<Vec<Instructor>, CoreError> {
        let rows = InstructorRepo::list(&self.pool)
            .await
            .map_err(persistence_error)?;
        Ok(rows.into_iter().map(Instructor::from).collect())
    }
}

/// Convert a sqlx error into a domain error, logging the full detail.
///
/// Constraint violations (such as an unknown administrator) are not
/// distinguished: the validator has already accepted the command, so any
/// store rejection is a server-side failure.
pub fn persistence_error(err: sqlx::Error) -> CoreError {
    tracing::error!(error = %err, "Database error");
    CoreError::Persistence(err.to_string())
}
