//! Repository for the `job_roles` table.

use placement_core::types::DbId;
use sqlx::PgPool;

use crate::models::job_role::{CreateJobRole, JobRole};

/// Provides insert and list operations for job roles.
pub struct JobRoleRepo;

impl JobRoleRepo {
    /// Insert a new job role, returning its generated id.
    ///
    /// A missing `min_cgpa` falls back to the column default.
    pub async fn create(pool: &PgPool, input: &CreateJobRole) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO job_roles (company_id, role_title, package_lpa, min_cgpa)
             VALUES ($1, $2, $3, COALESCE($4, 0))
             RETURNING jobrole_id",
        )
        .bind(input.company_id)
        .bind(&input.role_title)
        .bind(input.package_lpa)
        .bind(input.min_cgpa)
        .fetch_one(pool)
        .await
    }

    /// List all job roles with the offering company's name.
    pub async fn list(pool: &PgPool) -> Result<Vec<JobRole>, sqlx::Error> {
        sqlx::query_as::<_, JobRole>(
            "SELECT j.jobrole_id, j.company_id, j.role_title, j.package_lpa, j.min_cgpa,
                    c.company_name
             FROM job_roles j
             LEFT JOIN company c ON j.company_id = c.company_id
             ORDER BY j.jobrole_id",
        )
        .fetch_all(pool)
        .await
    }
}
