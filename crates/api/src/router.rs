//! Assembles the HTTP application.
//!
//! `main.rs` and the integration tests both call [`build_app_router`], so
//! tests exercise the same routes, fallback and middleware as production.

use std::sync::Arc;
use std::time::Duration;

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, HeaderValue, Method, StatusCode};
use axum::{Extension, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;
use crate::routes::{self, RouteCatalog, RouteInfo};
use crate::state::AppState;

const REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Build the application router.
///
/// Paths that match no route are looked up in `config.static_dir`.
/// Outermost to innermost, a request passes through CORS, request-id
/// assignment, tracing, request-id echo, the timeout and panic recovery.
pub fn build_app_router(state: AppState, config: &ServerConfig) -> Router {
    let (router, catalog) = RouteCatalog::new()
        .merge(routes::health::routes())
        .nest("/api", routes::api_routes())
        .merge(routes::debug::routes())
        .into_parts();
    tracing::debug!(routes = catalog.len(), "Route catalog built");
    let catalog: Arc<[RouteInfo]> = catalog.into();

    let timeout = Duration::from_secs(config.request_timeout_secs);
    let trace = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    router
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(Extension(catalog))
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout))
        .layer(PropagateRequestIdLayer::new(REQUEST_ID))
        .layer(trace)
        .layer(SetRequestIdLayer::new(REQUEST_ID, MakeRequestUuid))
        .layer(build_cors_layer(config))
        .with_state(state)
}

/// CORS for the browser front end.
///
/// `*` allows any origin without credentials; an explicit list allows
/// credentials. Panics on an origin that is not a valid header value.
pub fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(3600));

    if config.allows_any_origin() {
        return cors.allow_origin(AllowOrigin::any());
    }

    let origins = config
        .cors_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin)
                .unwrap_or_else(|e| panic!("CORS_ORIGINS entry {origin:?} is invalid: {e}"))
        })
        .collect::<Vec<_>>();

    cors.allow_origin(origins).allow_credentials(true)
}
