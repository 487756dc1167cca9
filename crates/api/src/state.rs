use std::sync::Arc;

use campus_core::command::CommandHandler;
use campus_core::department::{CreateDepartmentHandler, ValidCreateDepartment};
use campus_core::store::{DepartmentStore, InstructorDirectory};
use campus_db::PgStore;
use tokio_util::sync::CancellationToken;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool (health checks).
    pub pool: campus_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Department reads for listings and detail views.
    pub departments: Arc<dyn DepartmentStore>,
    /// Instructor lookups for administrator pickers.
    pub instructors: Arc<dyn InstructorDirectory>,
    /// The registered handler for department creation commands.
    pub create_department: Arc<dyn CommandHandler<ValidCreateDepartment>>,
    /// Server-wide shutdown signal; each dispatch gets a child token.
    pub shutdown: CancellationToken,
}

impl AppState {
    /// Wire the PostgreSQL-backed stores and handlers.
    pub fn new(pool: campus_db::DbPool, config: Arc<ServerConfig>, shutdown: CancellationToken) -> Self {
        let store = Arc::new(PgStore::new(pool.clone()));
        Self::with_stores(pool, config, store.clone(), store, shutdown)
    }

    /// Wire handlers over caller-provided stores.
    pub fn with_stores(
        pool: campus_db::DbPool,
        config: Arc<ServerConfig>,
        departments: Arc<dyn DepartmentStore>,
        instructors: Arc<dyn InstructorDirectory>,
        shutdown: CancellationToken,
    ) -> Self {
        let create_department = Arc::new(CreateDepartmentHandler::new(Arc::clone(&departments)));
        Self {
            pool,
            config,
            departments,
            instructors,
            create_department,
            shutdown,
        }
    }
}
