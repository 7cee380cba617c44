use axum::extract::State;
use axum::Json;
use placement_db::models::audit::StudentAuditEntry;
use placement_db::repositories::StudentAuditRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/student-audit
///
/// The trigger-maintained student history, newest first.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<StudentAuditEntry>>> {
    let entries = StudentAuditRepo::list(&state.pool).await?;
    Ok(Json(entries))
}
