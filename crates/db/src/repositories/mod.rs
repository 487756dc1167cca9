//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept a pool (or any Postgres executor) as the first argument.

pub mod department_repo;
pub mod instructor_repo;

pub use department_repo::DepartmentRepo;
pub use instructor_repo::InstructorRepo;
