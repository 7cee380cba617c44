//! Repository for the `department` table.

use placement_core::types::DbId;
use sqlx::PgPool;

use crate::models::department::{CreateDepartment, Department};

/// Provides insert and list operations for departments.
pub struct DepartmentRepo;

impl DepartmentRepo {
    /// Insert a new department, returning its generated id.
    pub async fn create(pool: &PgPool, input: &CreateDepartment) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar("INSERT INTO department (dept_name) VALUES ($1) RETURNING dept_id")
            .bind(&input.dept_name)
            .fetch_one(pool)
            .await
    }

    /// List all departments in id order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Department>, sqlx::Error> {
        sqlx::query_as::<_, Department>(
            "SELECT dept_id, dept_name FROM department ORDER BY dept_id",
        )
        .fetch_all(pool)
        .await
    }
}
