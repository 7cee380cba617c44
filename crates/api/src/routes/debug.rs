use axum::http::Method;
use axum::routing::get;

use crate::handlers::debug;
use crate::routes::RouteCatalog;
use crate::state::AppState;

/// Diagnostic routes mounted at the root.
///
/// ```text
/// GET /debug/routes    -> list_routes
/// ```
pub fn routes() -> RouteCatalog<AppState> {
    RouteCatalog::new().route("/debug/routes", &[Method::GET], get(debug::list_routes))
}
