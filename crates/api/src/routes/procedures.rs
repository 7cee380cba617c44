//! Route definitions for endpoints backed by stored functions and
//! procedures.

use axum::http::Method;
use axum::routing::{get, post};

use crate::handlers::{application, report};
use crate::routes::RouteCatalog;
use crate::state::AppState;

/// Procedure routes, mounted under `/api`.
///
/// ```text
/// GET  /placement-stats                   -> placement_stats
/// GET  /eligible-students/{jobrole_id}    -> eligible_students
/// GET  /top-companies                     -> top_companies
/// POST /apply-job                         -> apply_for_job
/// POST /record-placement                  -> record_placement
/// ```
pub fn routes() -> RouteCatalog<AppState> {
    RouteCatalog::new()
        .route("/placement-stats", &[Method::GET], get(report::placement_stats))
        .route(
            "/eligible-students/{jobrole_id}",
            &[Method::GET],
            get(report::eligible_students),
        )
        .route("/top-companies", &[Method::GET], get(report::top_companies))
        .route("/apply-job", &[Method::POST], post(application::apply_for_job))
        .route(
            "/record-placement",
            &[Method::POST],
            post(application::record_placement),
        )
}
