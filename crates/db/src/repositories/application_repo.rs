//! Repository for the `apply_for_job` and `record_placement` procedures.
//!
//! Each call is a single `CALL` statement: the procedure runs atomically in
//! the store and its INOUT parameters come back as the one result row, so
//! there is no session state to read afterwards.

use sqlx::PgPool;

use crate::models::application::{
    ApplicationOutcome, JobApplication, PlacementOutcome, PlacementRecord,
};

/// Invokes the placement procedures.
pub struct ApplicationRepo;

impl ApplicationRepo {
    /// Apply a student to a job role via `apply_for_job`.
    pub async fn apply_for_job(
        pool: &PgPool,
        input: &JobApplication,
    ) -> Result<ApplicationOutcome, sqlx::Error> {
        sqlx::query_as::<_, ApplicationOutcome>(
            "CALL apply_for_job($1, $2, NULL::BIGINT, NULL::TEXT)",
        )
        .bind(input.student_id)
        .bind(input.jobrole_id)
        .fetch_one(pool)
        .await
    }

    /// Record or update a placement outcome via `record_placement`.
    pub async fn record_placement(
        pool: &PgPool,
        input: &PlacementRecord,
    ) -> Result<PlacementOutcome, sqlx::Error> {
        sqlx::query_as::<_, PlacementOutcome>(
            "CALL record_placement($1, $2, $3, NULL::BIGINT, NULL::TEXT)",
        )
        .bind(input.student_id)
        .bind(input.jobrole_id)
        .bind(input.effective_status())
        .fetch_one(pool)
        .await
    }
}
