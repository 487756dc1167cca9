//! Field-level validation result types shared by every command validator.
//!
//! Validators are plain functions returning a [`ValidationResult`]; there is
//! no rule registry or reflection step.

pub mod rules;

pub use rules::{FieldViolation, ValidationResult};
