//! Handlers backed by the store's reporting functions.

use axum::extract::State;
use axum::Json;
use placement_core::types::DbId;
use placement_db::models::report::{DepartmentPlacementStats, EligibleStudent, TopCompany};
use placement_db::repositories::ReportRepo;

use crate::error::AppResult;
use crate::extract::ApiPath;
use crate::state::AppState;

/// GET /api/placement-stats
pub async fn placement_stats(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<DepartmentPlacementStats>>> {
    let stats = ReportRepo::placement_stats(&state.pool).await?;
    Ok(Json(stats))
}

/// GET /api/eligible-students/{jobrole_id}
pub async fn eligible_students(
    State(state): State<AppState>,
    ApiPath(jobrole_id): ApiPath<DbId>,
) -> AppResult<Json<Vec<EligibleStudent>>> {
    let students = ReportRepo::eligible_students(&state.pool, jobrole_id).await?;
    tracing::debug!(jobrole_id, count = students.len(), "Eligible students resolved");
    Ok(Json(students))
}

/// GET /api/top-companies
pub async fn top_companies(State(state): State<AppState>) -> AppResult<Json<Vec<TopCompany>>> {
    let companies = ReportRepo::top_companies(&state.pool).await?;
    Ok(Json(companies))
}
