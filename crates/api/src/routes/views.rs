use axum::http::Method;
use axum::routing::get;

use crate::handlers::{audit, view};
use crate::routes::RouteCatalog;
use crate::state::AppState;

/// Read-only view routes, mounted at `/api/views`.
///
/// ```text
/// GET /placement-ready      -> placement_ready
/// GET /active-jobs          -> active_jobs
/// GET /placement-summary    -> placement_summary
/// ```
pub fn routes() -> RouteCatalog<AppState> {
    RouteCatalog::new()
        .route("/placement-ready", &[Method::GET], get(view::placement_ready))
        .route("/active-jobs", &[Method::GET], get(view::active_jobs))
        .route("/placement-summary", &[Method::GET], get(view::placement_summary))
}

/// Audit log route, mounted under `/api`.
pub fn audit_routes() -> RouteCatalog<AppState> {
    RouteCatalog::new().route("/student-audit", &[Method::GET], get(audit::list))
}
