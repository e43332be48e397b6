//! Student record model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A student tracked by the library, independent of any user account.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Student {
    pub student_id: i64,
    pub name: String,
    pub roll_no: Option<String>,
    pub course: Option<String>,
    pub contact: Option<String>,
}

/// Add-student form. Only the name is required; there is no
/// duplicate-roll-number check.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AddStudentForm {
    #[validate(length(min = 1))]
    pub name: String,
    pub roll_no: Option<String>,
    pub course: Option<String>,
    pub contact: Option<String>,
}
