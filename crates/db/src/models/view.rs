//! Rows of the read-only reporting views.

use placement_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row of `placement_ready_students`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PlacementReadyStudent {
    pub student_id: DbId,
    pub student_name: String,
    pub roll_no: String,
    pub cgpa: f64,
    pub dept_name: Option<String>,
}

/// A row of `active_job_openings`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ActiveJobOpening {
    pub jobrole_id: DbId,
    pub role_title: String,
    pub company_id: DbId,
    pub company_name: String,
    pub location: Option<String>,
    pub package_lpa: f64,
    pub min_cgpa: f64,
    pub applicant_count: i64,
}

/// A row of `student_placement_summary`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StudentPlacementSummary {
    pub student_id: DbId,
    pub student_name: String,
    pub roll_no: String,
    pub dept_name: Option<String>,
    pub total_applications: i64,
    pub offers: i64,
    pub highest_package: Option<f64>,
    /// `Placed` or `Not Placed`.
    pub placement_status: String,
}
