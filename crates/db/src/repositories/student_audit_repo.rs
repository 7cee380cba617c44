//! Repository for the `student_audit` table.

use sqlx::PgPool;

use crate::models::audit::StudentAuditEntry;

/// Read access to the trigger-maintained student audit log.
pub struct StudentAuditRepo;

impl StudentAuditRepo {
    /// All audit entries, newest first. Ties on `action_time` fall back to
    /// insertion order, also newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<StudentAuditEntry>, sqlx::Error> {
        sqlx::query_as::<_, StudentAuditEntry>(
            "SELECT audit_id, student_id, action, details, action_time
             FROM student_audit
             ORDER BY action_time DESC, audit_id DESC",
        )
        .fetch_all(pool)
        .await
    }
}
