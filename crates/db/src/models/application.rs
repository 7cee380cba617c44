//! Inputs and outputs of the `apply_for_job` and `record_placement`
//! procedures.
//!
//! Both procedures report back through INOUT parameters; the outcome
//! structs map those parameters by name.

use placement_core::lenient;
use placement_core::placement::resolve_status;
use placement_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Request body for `POST /api/apply-job`.
#[derive(Debug, Clone, Deserialize)]
pub struct JobApplication {
    #[serde(deserialize_with = "lenient::number")]
    pub student_id: DbId,
    #[serde(alias = "job_id", deserialize_with = "lenient::number")]
    pub jobrole_id: DbId,
}

/// Output parameters of `apply_for_job`.
///
/// `application_id` is `None` when the store refused the application;
/// `message` says why.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ApplicationOutcome {
    #[sqlx(rename = "o_application_id")]
    pub application_id: Option<DbId>,
    #[sqlx(rename = "o_message")]
    pub message: String,
}

/// Request body for `POST /api/record-placement`.
#[derive(Debug, Clone, Deserialize)]
pub struct PlacementRecord {
    #[serde(deserialize_with = "lenient::number")]
    pub student_id: DbId,
    #[serde(alias = "job_id", deserialize_with = "lenient::number")]
    pub jobrole_id: DbId,
    pub status: Option<String>,
}

impl PlacementRecord {
    /// The status to record, with the default applied.
    pub fn effective_status(&self) -> &str {
        resolve_status(self.status.as_deref())
    }
}

/// Output parameters of `record_placement`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PlacementOutcome {
    #[sqlx(rename = "o_placement_id")]
    pub placement_id: Option<DbId>,
    #[sqlx(rename = "o_message")]
    pub message: String,
}
