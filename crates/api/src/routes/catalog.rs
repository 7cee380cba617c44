//! Route registration that remembers what it registered.
//!
//! Axum routers cannot be introspected after construction, so routes are
//! added through [`RouteCatalog`], which records each path and its methods
//! alongside the real [`Router`]. The record backs `GET /debug/routes`.

use axum::http::Method;
use axum::routing::MethodRouter;
use axum::Router;
use serde::Serialize;

/// One registered route: its full path and comma-separated methods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteInfo {
    pub path: String,
    pub methods: String,
}

/// A [`Router`] plus the list of routes registered on it.
pub struct RouteCatalog<S = ()> {
    router: Router<S>,
    routes: Vec<RouteInfo>,
}

impl<S> Default for RouteCatalog<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S> RouteCatalog<S>
where
    S: Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self {
            router: Router::new(),
            routes: Vec::new(),
        }
    }

    /// Register `handler` at `path`, recording `methods` for introspection.
    ///
    /// `methods` must list the methods `handler` actually serves.
    pub fn route(mut self, path: &str, methods: &[Method], handler: MethodRouter<S>) -> Self {
        self.router = self.router.route(path, handler);
        self.routes.push(RouteInfo {
            path: path.to_string(),
            methods: methods
                .iter()
                .map(Method::as_str)
                .collect::<Vec<_>>()
                .join(","),
        });
        self
    }

    /// Merge another catalog's routes at the same level.
    pub fn merge(mut self, other: RouteCatalog<S>) -> Self {
        self.router = self.router.merge(other.router);
        self.routes.extend(other.routes);
        self
    }

    /// Mount another catalog under `prefix`.
    pub fn nest(mut self, prefix: &str, other: RouteCatalog<S>) -> Self {
        self.router = self.router.nest(prefix, other.router);
        self.routes
            .extend(other.routes.into_iter().map(|route| RouteInfo {
                path: format!("{prefix}{}", route.path),
                methods: route.methods,
            }));
        self
    }

    /// The routes recorded so far, in registration order.
    pub fn routes(&self) -> &[RouteInfo] {
        &self.routes
    }

    /// Split into the router and the recorded routes.
    pub fn into_parts(self) -> (Router<S>, Vec<RouteInfo>) {
        (self.router, self.routes)
    }
}
