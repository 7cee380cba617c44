//! Department entity model and DTOs.

use placement_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `department` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Department {
    pub dept_id: DbId,
    pub dept_name: String,
}

/// DTO for creating a department.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDepartment {
    pub dept_name: String,
}
