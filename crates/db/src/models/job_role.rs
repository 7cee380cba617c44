//! Job role entity model and DTOs.

use placement_core::lenient;
use placement_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A job role row joined with the offering company's name.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct JobRole {
    pub jobrole_id: DbId,
    pub company_id: DbId,
    pub role_title: String,
    /// Annual package in lakhs per annum.
    pub package_lpa: f64,
    /// Minimum CGPA required to apply.
    pub min_cgpa: f64,
    pub company_name: Option<String>,
}

/// DTO for creating a job role.
///
/// Accepts `title` for `role_title` and `salary` for `package_lpa`.
/// `min_cgpa` defaults to 0 in the database when omitted.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateJobRole {
    #[serde(deserialize_with = "lenient::number")]
    pub company_id: DbId,
    #[serde(alias = "title")]
    pub role_title: String,
    #[serde(alias = "salary", deserialize_with = "lenient::number")]
    pub package_lpa: f64,
    #[serde(default, deserialize_with = "lenient::optional_number")]
    pub min_cgpa: Option<f64>,
}
