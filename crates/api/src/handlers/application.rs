//! Handlers for the placement procedures.
//!
//! The id and message in each response come from the procedure's output
//! parameters; this layer only relays them.

use axum::extract::State;
use axum::Json;
use placement_db::models::application::{
    ApplicationOutcome, JobApplication, PlacementOutcome, PlacementRecord,
};
use placement_db::repositories::ApplicationRepo;

use crate::error::AppResult;
use crate::extract::ApiJson;
use crate::state::AppState;

/// POST /api/apply-job
pub async fn apply_for_job(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<JobApplication>,
) -> AppResult<Json<ApplicationOutcome>> {
    let outcome = ApplicationRepo::apply_for_job(&state.pool, &input).await?;
    tracing::info!(
        student_id = input.student_id,
        jobrole_id = input.jobrole_id,
        application_id = ?outcome.application_id,
        message = %outcome.message,
        "apply_for_job completed"
    );
    Ok(Json(outcome))
}

/// POST /api/record-placement
pub async fn record_placement(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<PlacementRecord>,
) -> AppResult<Json<PlacementOutcome>> {
    let outcome = ApplicationRepo::record_placement(&state.pool, &input).await?;
    tracing::info!(
        student_id = input.student_id,
        jobrole_id = input.jobrole_id,
        status = input.effective_status(),
        placement_id = ?outcome.placement_id,
        "record_placement completed"
    );
    Ok(Json(outcome))
}
