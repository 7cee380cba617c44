//! Repository for the read-only reporting views.

use sqlx::PgPool;

use crate::models::view::{ActiveJobOpening, PlacementReadyStudent, StudentPlacementSummary};

/// Selects from `placement_ready_students`, `active_job_openings` and
/// `student_placement_summary`. Row order is defined by the views.
pub struct ViewRepo;

impl ViewRepo {
    pub async fn placement_ready(pool: &PgPool) -> Result<Vec<PlacementReadyStudent>, sqlx::Error> {
        sqlx::query_as::<_, PlacementReadyStudent>("SELECT * FROM placement_ready_students")
            .fetch_all(pool)
            .await
    }

    pub async fn active_jobs(pool: &PgPool) -> Result<Vec<ActiveJobOpening>, sqlx::Error> {
        sqlx::query_as::<_, ActiveJobOpening>("SELECT * FROM active_job_openings")
            .fetch_all(pool)
            .await
    }

    pub async fn placement_summary(
        pool: &PgPool,
    ) -> Result<Vec<StudentPlacementSummary>, sqlx::Error> {
        sqlx::query_as::<_, StudentPlacementSummary>("SELECT * FROM student_placement_summary")
            .fetch_all(pool)
            .await
    }
}
