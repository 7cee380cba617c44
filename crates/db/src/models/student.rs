//! Student entity model and DTOs.

use placement_core::lenient;
use placement_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A student row joined with its department's name.
///
/// `department_name` is `None` when the student has no department.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Student {
    pub student_id: DbId,
    pub student_name: String,
    pub roll_no: String,
    pub cgpa: f64,
    pub department_id: Option<DbId>,
    pub department_name: Option<String>,
}

/// DTO for creating a student.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStudent {
    pub student_name: String,
    #[serde(deserialize_with = "lenient::text")]
    pub roll_no: String,
    #[serde(deserialize_with = "lenient::number")]
    pub cgpa: f64,
    #[serde(default, deserialize_with = "lenient::optional_number")]
    pub department_id: Option<DbId>,
}
