//! Persistence ports.
//!
//! The PostgreSQL adapters live in `campus-db`; [`crate::memory`] provides
//! an in-process implementation with the same constraints.

use async_trait::async_trait;

use crate::department::{Department, DepartmentSummary, NewDepartment};
use crate::error::CoreError;
use crate::instructor::Instructor;
use crate::types::DbId;

#[async_trait]
pub trait DepartmentStore: Send + Sync {
    /// Insert and commit a new department, returning its generated id.
    ///
    /// The write is atomic: dropping the returned future before it resolves
    /// must leave no row behind.
    async fn insert(&self, department: NewDepartment) -> Result<DbId, CoreError>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<Department>, CoreError>;

    /// All departments with their administrator's display name, ordered by
    /// name ascending.
    async fn list_summaries(&self) -> Result<Vec<DepartmentSummary>, CoreError>;
}

#[async_trait]
pub trait InstructorDirectory: Send + Sync {
    /// All instructors ordered by last name, then first name.
    async fn list_instructors(&self) -> Result<Vec<Instructor>, CoreError>;
}
