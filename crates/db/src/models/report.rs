//! Result rows of the store's reporting functions.

use placement_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// One row of `get_placement_stats()`: placement figures per department.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DepartmentPlacementStats {
    pub dept_id: DbId,
    pub dept_name: String,
    pub total_students: i64,
    pub placed_students: i64,
    /// Percentage of the department's students holding a `Placed` record.
    pub placement_rate: f64,
    /// Mean package across `Placed` records; `None` when nobody is placed.
    pub average_package: Option<f64>,
}

/// One row of `get_eligible_students(jobrole_id)`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EligibleStudent {
    pub student_id: DbId,
    pub student_name: String,
    pub roll_no: String,
    pub cgpa: f64,
    pub dept_name: Option<String>,
}

/// One row of `get_top_companies_by_package()`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TopCompany {
    pub company_id: DbId,
    pub company_name: String,
    pub role_count: i64,
    pub average_package: f64,
    pub highest_package: f64,
}
