//! In-process store implementing the persistence ports.
//!
//! Mirrors the relational constraints that matter to the department flows:
//! generated ids start at 1, the administrator must reference an existing
//! instructor, and each insert is applied under a single write lock so it
//! is either fully visible or absent.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::department::{Department, DepartmentSummary, NewDepartment};
use crate::error::CoreError;
use crate::instructor::Instructor;
use crate::store::{DepartmentStore, InstructorDirectory};
use crate::types::DbId;

#[derive(Debug, Default)]
pub struct InMemoryStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    last_department_id: DbId,
    departments: BTreeMap<DbId, Department>,
    instructors: BTreeMap<DbId, Instructor>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-seeded with instructors that departments may reference.
    pub fn with_instructors(instructors: impl IntoIterator<Item = Instructor>) -> Self {
        let instructors = instructors.into_iter().map(|i| (i.id, i)).collect();
        Self {
            inner: RwLock::new(Inner {
                instructors,
                ..Inner::default()
            }),
        }
    }

    pub async fn department_count(&self) -> usize {
        self.inner.read().await.departments.len()
    }
}

#[async_trait]
impl DepartmentStore for InMemoryStore {
    async fn insert(&self, department: NewDepartment) -> Result<DbId, CoreError> {
        let mut inner = self.inner.write().await;

        if !inner.instructors.contains_key(&department.administrator_id) {
            return Err(CoreError::Persistence(format!(
                "administrator_id {} does not reference an existing instructor",
                department.administrator_id
            )));
        }

        let id = inner.last_department_id + 1;
        let now = chrono::Utc::now();
        let NewDepartment {
            name,
            budget,
            start_date,
            administrator_id,
        } = department;
        inner.departments.insert(
            id,
            Department {
                id,
                name,
                budget,
                start_date,
                administrator_id: Some(administrator_id),
                created_at: now,
                updated_at: now,
            },
        );
        inner.last_department_id = id;
        Ok(id)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Department>, CoreError> {
        Ok(self.inner.read().await.departments.get(&id).cloned())
    }

    async fn list_summaries(&self) -> Result<Vec<DepartmentSummary>, CoreError> {
        let inner = self.inner.read().await;
        let mut summaries: Vec<DepartmentSummary> = inner
            .departments
            .values()
            .map(|d| DepartmentSummary {
                id: d.id,
                name: d.name.clone(),
                budget: d.budget,
                start_date: d.start_date,
                administrator_id: d.administrator_id,
                administrator_name: d
                    .administrator_id
                    .and_then(|id| inner.instructors.get(&id))
                    .map(Instructor::full_name),
            })
            .collect();
        summaries.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(summaries)
    }
}

#[async_trait]
impl InstructorDirectory for InMemoryStore {
    async fn list_instructors(&self) -> Result<Vec<Instructor>, CoreError> {
        let inner = self.inner.read().await;
        let mut instructors: Vec<Instructor> = inner.instructors.values().cloned().collect();
        instructors.sort_by(|a, b| {
            a.last_name
                .cmp(&b.last_name)
                .then_with(|| a.first_mid_name.cmp(&b.first_mid_name))
        });
        Ok(instructors)
    }
}
