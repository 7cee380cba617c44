//! Handlers for the read-only reporting views.

use axum::extract::State;
use axum::Json;
use placement_db::models::view::{ActiveJobOpening, PlacementReadyStudent, StudentPlacementSummary};
use placement_db::repositories::ViewRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/views/placement-ready
pub async fn placement_ready(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<PlacementReadyStudent>>> {
    Ok(Json(ViewRepo::placement_ready(&state.pool).await?))
}

/// GET /api/views/active-jobs
pub async fn active_jobs(State(state): State<AppState>) -> AppResult<Json<Vec<ActiveJobOpening>>> {
    Ok(Json(ViewRepo::active_jobs(&state.pool).await?))
}

/// GET /api/views/placement-summary
pub async fn placement_summary(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<StudentPlacementSummary>>> {
    Ok(Json(ViewRepo::placement_summary(&state.pool).await?))
}
