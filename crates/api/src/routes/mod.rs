pub mod catalog;
pub mod debug;
pub mod entities;
pub mod health;
pub mod procedures;
pub mod views;

pub use catalog::{RouteCatalog, RouteInfo};

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /data                               aggregate fetch (GET)
/// /students                           create (POST)
/// /departments                        create (POST)
/// /companies                          create (POST)
/// /jobroles                           create (POST)
/// /placements                         create (POST)
///
/// /placement-stats                    get_placement_stats() (GET)
/// /eligible-students/{jobrole_id}     get_eligible_students() (GET)
/// /top-companies                      get_top_companies_by_package() (GET)
/// /apply-job                          CALL apply_for_job (POST)
/// /record-placement                   CALL record_placement (POST)
///
/// /views/placement-ready              view (GET)
/// /views/active-jobs                  view (GET)
/// /views/placement-summary            view (GET)
/// /student-audit                      audit log, newest first (GET)
/// ```
pub fn api_routes() -> RouteCatalog<AppState> {
    RouteCatalog::new()
        .merge(entities::routes())
        .merge(procedures::routes())
        .nest("/views", views::routes())
        .merge(views::audit_routes())
}
