//! Repository for the store's set-returning reporting functions.

use placement_core::types::DbId;
use sqlx::PgPool;

use crate::models::report::{DepartmentPlacementStats, EligibleStudent, TopCompany};

/// Wraps `get_placement_stats`, `get_eligible_students` and
/// `get_top_companies_by_package`.
pub struct ReportRepo;

impl ReportRepo {
    /// Per-department placement figures, in department id order.
    pub async fn placement_stats(
        pool: &PgPool,
    ) -> Result<Vec<DepartmentPlacementStats>, sqlx::Error> {
        sqlx::query_as::<_, DepartmentPlacementStats>("SELECT * FROM get_placement_stats()")
            .fetch_all(pool)
            .await
    }

    /// Students the store considers eligible for a job role.
    ///
    /// Returns an empty list for an unknown job role.
    pub async fn eligible_students(
        pool: &PgPool,
        jobrole_id: DbId,
    ) -> Result<Vec<EligibleStudent>, sqlx::Error> {
        sqlx::query_as::<_, EligibleStudent>("SELECT * FROM get_eligible_students($1)")
            .bind(jobrole_id)
            .fetch_all(pool)
            .await
    }

    /// Companies ranked by average package, highest first.
    pub async fn top_companies(pool: &PgPool) -> Result<Vec<TopCompany>, sqlx::Error> {
        sqlx::query_as::<_, TopCompany>("SELECT * FROM get_top_companies_by_package()")
            .fetch_all(pool)
            .await
    }
}
