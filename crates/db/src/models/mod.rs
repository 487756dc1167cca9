//! Row structs for each table.
//!
//! Each submodule contains a `FromRow` struct matching the database row and
//! a conversion into the `campus-core` entity it backs.

pub mod department;
pub mod instructor;
