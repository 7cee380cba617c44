//! Repository for the `student` table.

use placement_core::types::DbId;
use sqlx::PgPool;

use crate::models::student::{CreateStudent, Student};

/// Provides insert and list operations for students.
pub struct StudentRepo;

impl StudentRepo {
    /// Insert a new student, returning the generated id.
    ///
    /// The audit trigger records the insert in `student_audit`.
    pub async fn create(pool: &PgPool, input: &CreateStudent) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO student (student_name, roll_no, cgpa, department_id)
             VALUES ($1, $2, $3, $4)
             RETURNING student_id",
        )
        .bind(&input.student_name)
        .bind(&input.roll_no)
        .bind(input.cgpa)
        .bind(input.department_id)
        .fetch_one(pool)
        .await
    }

    /// List all students with their department name (LEFT JOIN, so students
    /// without a department are included).
    pub async fn list(pool: &PgPool) -> Result<Vec<Student>, sqlx::Error> {
        sqlx::query_as::<_, Student>(
            "SELECT s.student_id, s.student_name, s.roll_no, s.cgpa, s.department_id,
                    d.dept_name AS department_name
             FROM student s
             LEFT JOIN department d ON s.department_id = d.dept_id
             ORDER BY s.student_id",
        )
        .fetch_all(pool)
        .await
    }
}
