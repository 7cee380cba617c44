//! Route definitions for the aggregate fetch and entity creation.

use axum::http::Method;
use axum::routing::{get, post};

use crate::handlers::{data, entities};
use crate::routes::RouteCatalog;
use crate::state::AppState;

/// Entity routes, mounted under `/api`.
///
/// ```text
/// GET  /data           -> fetch_all
/// POST /students       -> create_student
/// POST /departments    -> create_department
/// POST /companies      -> create_company
/// POST /jobroles       -> create_job_role
/// POST /placements     -> create_placement
/// ```
pub fn routes() -> RouteCatalog<AppState> {
    RouteCatalog::new()
        .route("/data", &[Method::GET], get(data::fetch_all))
        .route("/students", &[Method::POST], post(entities::create_student))
        .route("/departments", &[Method::POST], post(entities::create_department))
        .route("/companies", &[Method::POST], post(entities::create_company))
        .route("/jobroles", &[Method::POST], post(entities::create_job_role))
        .route("/placements", &[Method::POST], post(entities::create_placement))
}
