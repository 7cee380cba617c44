//! Placement entity model and DTOs.

use placement_core::lenient;
use placement_core::placement::resolve_status;
use placement_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A placement row joined with student, job role and company names.
///
/// The joined columns are `None` only if the referenced rows disappear
/// between the insert and the read.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Placement {
    pub placement_id: DbId,
    pub student_id: DbId,
    pub jobrole_id: DbId,
    pub status: String,
    pub applied_at: Timestamp,
    pub student_name: Option<String>,
    pub role_title: Option<String>,
    pub package_lpa: Option<f64>,
    pub company_name: Option<String>,
}

/// DTO for creating a placement. `job_id` is accepted for `jobrole_id`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePlacement {
    #[serde(deserialize_with = "lenient::number")]
    pub student_id: DbId,
    #[serde(alias = "job_id", deserialize_with = "lenient::number")]
    pub jobrole_id: DbId,
    /// Defaults to `Applied` when missing or empty.
    pub status: Option<String>,
}

impl CreatePlacement {
    /// The status to store, with the default applied.
    pub fn effective_status(&self) -> &str {
        resolve_status(self.status.as_deref())
    }
}
