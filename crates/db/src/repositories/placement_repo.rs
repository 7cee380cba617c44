//! Repository for the `placement` table.

use placement_core::types::DbId;
use sqlx::PgPool;

use crate::models::placement::{CreatePlacement, Placement};

/// Provides insert and list operations for placements.
pub struct PlacementRepo;

impl PlacementRepo {
    /// Insert a new placement, returning its generated id.
    ///
    /// A missing or empty status is stored as `Applied`.
    pub async fn create(pool: &PgPool, input: &CreatePlacement) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO placement (student_id, jobrole_id, status)
             VALUES ($1, $2, $3)
             RETURNING placement_id",
        )
        .bind(input.student_id)
        .bind(input.jobrole_id)
        .bind(input.effective_status())
        .fetch_one(pool)
        .await
    }

    /// List all placements with student name, role title, package and
    /// company name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Placement>, sqlx::Error> {
        sqlx::query_as::<_, Placement>(
            "SELECT p.placement_id, p.student_id, p.jobrole_id, p.status, p.applied_at,
                    s.student_name, j.role_title, j.package_lpa, c.company_name
             FROM placement p
             LEFT JOIN student s ON p.student_id = s.student_id
             LEFT JOIN job_roles j ON p.jobrole_id = j.jobrole_id
             LEFT JOIN company c ON j.company_id = c.company_id
             ORDER BY p.placement_id",
        )
        .fetch_all(pool)
        .await
    }
}
