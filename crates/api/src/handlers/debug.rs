//! Diagnostic handlers.

use std::sync::Arc;

use axum::{Extension, Json};
use serde::Serialize;

use crate::routes::RouteInfo;

/// Response body for `GET /debug/routes`.
#[derive(Debug, Serialize)]
pub struct RoutesResponse {
    pub routes: Vec<RouteInfo>,
}

/// GET /debug/routes
///
/// Lists every route registered through the route catalog.
pub async fn list_routes(Extension(routes): Extension<Arc<[RouteInfo]>>) -> Json<RoutesResponse> {
    Json(RoutesResponse {
        routes: routes.to_vec(),
    })
}
