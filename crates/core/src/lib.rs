//! Domain layer for the campus administration backend.
//!
//! Pure logic and port traits only: no HTTP, no SQL. The `db` crate
//! provides the PostgreSQL adapters and the `api` crate wires everything
//! behind Axum.

pub mod command;
pub mod department;
pub mod error;
pub mod instructor;
pub mod memory;
pub mod money;
pub mod store;
pub mod types;
pub mod validation;
