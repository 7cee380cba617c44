//! Student audit log model.
//!
//! Entries are written by the `trg_student_audit` trigger and are never
//! modified.

use placement_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A single row of `student_audit`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StudentAuditEntry {
    pub audit_id: DbId,
    /// The student the action applied to. Kept after the student is deleted.
    pub student_id: Option<DbId>,
    /// `INSERT`, `UPDATE` or `DELETE`.
    pub action: String,
    pub details: Option<String>,
    pub action_time: Timestamp,
}
