//! Repository for the `company` table.

use placement_core::types::DbId;
use sqlx::PgPool;

use crate::models::company::{Company, CreateCompany};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "company_id, company_name, location, contact_email, website";

/// Provides insert and list operations for companies.
pub struct CompanyRepo;

impl CompanyRepo {
    /// Insert a new company, returning its generated id.
    pub async fn create(pool: &PgPool, input: &CreateCompany) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO company (company_name, location, contact_email, website)
             VALUES ($1, $2, $3, $4)
             RETURNING company_id",
        )
        .bind(&input.company_name)
        .bind(&input.location)
        .bind(&input.contact_email)
        .bind(&input.website)
        .fetch_one(pool)
        .await
    }

    /// List all companies in id order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Company>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM company ORDER BY company_id");
        sqlx::query_as::<_, Company>(&query).fetch_all(pool).await
    }
}
