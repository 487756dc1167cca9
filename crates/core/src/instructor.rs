//! Instructor reference data.
//!
//! Instructors are only ever referenced here (as department administrators);
//! they are looked up, never created or mutated, by the department flows.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::DbId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instructor {
    pub id: DbId,
    pub last_name: String,
    pub first_mid_name: String,
    pub hire_date: NaiveDate,
}

impl Instructor {
    /// `Last, First Middle`, as shown in administrator pickers and listings.
    pub fn full_name(&self) -> String {
        format!("{}, {}", self.last_name, self.first_mid_name)
    }
}
