//! Create handlers for the five entity tables.
//!
//! Each is a single parameterized insert. Foreign-key and constraint
//! violations come back from the store and surface as 500s; nothing is
//! pre-checked here.

use axum::extract::State;
use axum::Json;
use placement_core::entity::EntityKind;
use placement_db::models::company::CreateCompany;
use placement_db::models::department::CreateDepartment;
use placement_db::models::job_role::CreateJobRole;
use placement_db::models::placement::CreatePlacement;
use placement_db::models::student::CreateStudent;
use placement_db::repositories::{
    CompanyRepo, DepartmentRepo, JobRoleRepo, PlacementRepo, StudentRepo,
};

use crate::error::AppResult;
use crate::extract::ApiJson;
use crate::response::CreatedResponse;
use crate::state::AppState;

/// POST /api/students
pub async fn create_student(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateStudent>,
) -> AppResult<Json<CreatedResponse>> {
    let id = StudentRepo::create(&state.pool, &input).await?;
    Ok(Json(CreatedResponse::new(EntityKind::Student, id)))
}

/// POST /api/departments
pub async fn create_department(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateDepartment>,
) -> AppResult<Json<CreatedResponse>> {
    let id = DepartmentRepo::create(&state.pool, &input).await?;
    Ok(Json(CreatedResponse::new(EntityKind::Department, id)))
}

/// POST /api/companies
pub async fn create_company(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateCompany>,
) -> AppResult<Json<CreatedResponse>> {
    let id = CompanyRepo::create(&state.pool, &input).await?;
    Ok(Json(CreatedResponse::new(EntityKind::Company, id)))
}

/// POST /api/jobroles
pub async fn create_job_role(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateJobRole>,
) -> AppResult<Json<CreatedResponse>> {
    let id = JobRoleRepo::create(&state.pool, &input).await?;
    Ok(Json(CreatedResponse::new(EntityKind::JobRole, id)))
}

/// POST /api/placements
///
/// A missing or empty `status` is stored as `Applied`.
pub async fn create_placement(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreatePlacement>,
) -> AppResult<Json<CreatedResponse>> {
    let id = PlacementRepo::create(&state.pool, &input).await?;
    Ok(Json(CreatedResponse::new(EntityKind::Placement, id)))
}
