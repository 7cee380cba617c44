//! Handler for the aggregate fetch (`GET /api/data`).

use std::future::Future;

use axum::extract::State;
use axum::Json;
use placement_core::entity::EntityKind;
use placement_db::models::company::Company;
use placement_db::models::department::Department;
use placement_db::models::job_role::JobRole;
use placement_db::models::placement::Placement;
use placement_db::models::student::Student;
use placement_db::repositories::{
    CompanyRepo, DepartmentRepo, JobRoleRepo, PlacementRepo, StudentRepo,
};
use serde::Serialize;

use crate::error::AppResult;
use crate::state::AppState;

/// Every entity collection in one payload. Empty tables serialize as `[]`.
#[derive(Debug, Serialize)]
pub struct AggregateData {
    pub students: Vec<Student>,
    pub departments: Vec<Department>,
    pub companies: Vec<Company>,
    pub job_roles: Vec<JobRole>,
    pub placements: Vec<Placement>,
}

/// GET /api/data
///
/// Runs the five list queries concurrently. The join resolves once: the
/// first failure is returned and the remaining queries are dropped.
pub async fn fetch_all(State(state): State<AppState>) -> AppResult<Json<AggregateData>> {
    let pool = &state.pool;
    let (students, departments, companies, job_roles, placements) = tokio::try_join!(
        tagged(EntityKind::Student, StudentRepo::list(pool)),
        tagged(EntityKind::Department, DepartmentRepo::list(pool)),
        tagged(EntityKind::Company, CompanyRepo::list(pool)),
        tagged(EntityKind::JobRole, JobRoleRepo::list(pool)),
        tagged(EntityKind::Placement, PlacementRepo::list(pool)),
    )?;

    Ok(Json(AggregateData {
        students,
        departments,
        companies,
        job_roles,
        placements,
    }))
}

/// Log which collection a failed sub-query belonged to.
async fn tagged<T>(
    kind: EntityKind,
    query: impl Future<Output = Result<T, sqlx::Error>>,
) -> Result<T, sqlx::Error> {
    query.await.inspect_err(|err| {
        tracing::warn!(collection = kind.collection_key(), error = %err, "Aggregate sub-query failed");
    })
}
