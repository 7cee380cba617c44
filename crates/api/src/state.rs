/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the pool is reference-counted internally.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool. Each query acquires and releases its own
    /// connection.
    pub pool: placement_db::DbPool,
}
