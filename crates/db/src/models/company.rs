//! Company entity model and DTOs.

use placement_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `company` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Company {
    pub company_id: DbId,
    pub company_name: String,
    pub location: Option<String>,
    pub contact_email: Option<String>,
    pub website: Option<String>,
}

/// DTO for creating a company. `name` is accepted for `company_name`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCompany {
    #[serde(alias = "name")]
    pub company_name: String,
    pub location: Option<String>,
    pub contact_email: Option<String>,
    pub website: Option<String>,
}
