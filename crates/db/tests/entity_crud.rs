//! Integration tests for entity inserts and the joined list queries.
//!
//! Exercises the repository layer against a real database:
//! - Create the full hierarchy (department -> student, company -> job role -> placement)
//! - Joined names on list queries
//! - Foreign key and unique constraint violations
//! - Placement status default

use placement_core::placement::STATUS_APPLIED;
use placement_db::models::company::CreateCompany;
use placement_db::models::department::CreateDepartment;
use placement_db::models::job_role::CreateJobRole;
use placement_db::models::placement::CreatePlacement;
use placement_db::models::student::CreateStudent;
use placement_db::repositories::{
    CompanyRepo, DepartmentRepo, JobRoleRepo, PlacementRepo, StudentRepo,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_department(name: &str) -> CreateDepartment {
    CreateDepartment {
        dept_name: name.to_string(),
    }
}

fn new_student(name: &str, roll_no: &str, cgpa: f64, department_id: Option<i64>) -> CreateStudent {
    CreateStudent {
        student_name: name.to_string(),
        roll_no: roll_no.to_string(),
        cgpa,
        department_id,
    }
}

fn new_company(name: &str) -> CreateCompany {
    CreateCompany {
        company_name: name.to_string(),
        location: Some("Bengaluru".to_string()),
        contact_email: Some("hr@example.com".to_string()),
        website: None,
    }
}

fn new_job_role(company_id: i64, title: &str, package_lpa: f64) -> CreateJobRole {
    CreateJobRole {
        company_id,
        role_title: title.to_string(),
        package_lpa,
        min_cgpa: None,
    }
}

fn new_placement(student_id: i64, jobrole_id: i64, status: Option<&str>) -> CreatePlacement {
    CreatePlacement {
        student_id,
        jobrole_id,
        status: status.map(str::to_string),
    }
}

/// Returns the Postgres SQLSTATE of a database error.
fn sqlstate(err: &sqlx::Error) -> Option<String> {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().map(|c| c.into_owned()),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_full_hierarchy(pool: PgPool) {
    let dept_id = DepartmentRepo::create(&pool, &new_department("CS")).await.unwrap();
    let student_id = StudentRepo::create(&pool, &new_student("Asha", "CS001", 8.4, Some(dept_id)))
        .await
        .unwrap();
    let company_id = CompanyRepo::create(&pool, &new_company("Acme")).await.unwrap();
    let jobrole_id = JobRoleRepo::create(&pool, &new_job_role(company_id, "SDE", 12.0))
        .await
        .unwrap();
    let placement_id = PlacementRepo::create(&pool, &new_placement(student_id, jobrole_id, None))
        .await
        .unwrap();

    assert!(dept_id > 0);
    assert!(student_id > 0);
    assert!(company_id > 0);
    assert!(jobrole_id > 0);
    assert!(placement_id > 0);

    let students = StudentRepo::list(&pool).await.unwrap();
    assert_eq!(students.len(), 1);
    assert_eq!(students[0].department_name.as_deref(), Some("CS"));

    let roles = JobRoleRepo::list(&pool).await.unwrap();
    assert_eq!(roles[0].company_name.as_deref(), Some("Acme"));
    assert_eq!(roles[0].min_cgpa, 0.0);

    let placements = PlacementRepo::list(&pool).await.unwrap();
    assert_eq!(placements.len(), 1);
    let placement = &placements[0];
    assert_eq!(placement.placement_id, placement_id);
    assert_eq!(placement.student_name.as_deref(), Some("Asha"));
    assert_eq!(placement.role_title.as_deref(), Some("SDE"));
    assert_eq!(placement.package_lpa, Some(12.0));
    assert_eq!(placement.company_name.as_deref(), Some("Acme"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_student_without_department_is_listed(pool: PgPool) {
    StudentRepo::create(&pool, &new_student("Ravi", "ME042", 7.1, None))
        .await
        .unwrap();

    let students = StudentRepo::list(&pool).await.unwrap();
    assert_eq!(students.len(), 1);
    assert_eq!(students[0].department_id, None);
    assert_eq!(students[0].department_name, None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_placement_status_defaults_to_applied(pool: PgPool) {
    let student_id = StudentRepo::create(&pool, &new_student("Asha", "CS001", 8.4, None))
        .await
        .unwrap();
    let company_id = CompanyRepo::create(&pool, &new_company("Acme")).await.unwrap();
    let first_role = JobRoleRepo::create(&pool, &new_job_role(company_id, "SDE", 12.0))
        .await
        .unwrap();
    let second_role = JobRoleRepo::create(&pool, &new_job_role(company_id, "SRE", 10.0))
        .await
        .unwrap();

    PlacementRepo::create(&pool, &new_placement(student_id, first_role, None))
        .await
        .unwrap();
    PlacementRepo::create(&pool, &new_placement(student_id, second_role, Some("")))
        .await
        .unwrap();

    let placements = PlacementRepo::list(&pool).await.unwrap();
    assert_eq!(placements.len(), 2);
    assert!(placements.iter().all(|p| p.status == STATUS_APPLIED));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_placement_keeps_custom_status(pool: PgPool) {
    let student_id = StudentRepo::create(&pool, &new_student("Asha", "CS001", 8.4, None))
        .await
        .unwrap();
    let company_id = CompanyRepo::create(&pool, &new_company("Acme")).await.unwrap();
    let jobrole_id = JobRoleRepo::create(&pool, &new_job_role(company_id, "SDE", 12.0))
        .await
        .unwrap();

    PlacementRepo::create(&pool, &new_placement(student_id, jobrole_id, Some("Interviewing")))
        .await
        .unwrap();

    let placements = PlacementRepo::list(&pool).await.unwrap();
    assert_eq!(placements[0].status, "Interviewing");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_placement_with_missing_job_role_is_rejected(pool: PgPool) {
    let student_id = StudentRepo::create(&pool, &new_student("Asha", "CS001", 8.4, None))
        .await
        .unwrap();

    let err = PlacementRepo::create(&pool, &new_placement(student_id, 999_999, None))
        .await
        .unwrap_err();
    assert_eq!(sqlstate(&err).as_deref(), Some("23503"));
    assert!(PlacementRepo::list(&pool).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_job_role_with_missing_company_is_rejected(pool: PgPool) {
    let err = JobRoleRepo::create(&pool, &new_job_role(424_242, "SDE", 12.0))
        .await
        .unwrap_err();
    assert_eq!(sqlstate(&err).as_deref(), Some("23503"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_student_with_missing_department_is_rejected(pool: PgPool) {
    let err = StudentRepo::create(&pool, &new_student("Asha", "CS001", 8.4, Some(77)))
        .await
        .unwrap_err();
    assert_eq!(sqlstate(&err).as_deref(), Some("23503"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_roll_no_is_rejected(pool: PgPool) {
    StudentRepo::create(&pool, &new_student("Asha", "CS001", 8.4, None))
        .await
        .unwrap();
    let err = StudentRepo::create(&pool, &new_student("Asha Again", "CS001", 9.0, None))
        .await
        .unwrap_err();
    assert_eq!(sqlstate(&err).as_deref(), Some("23505"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_placement_is_rejected(pool: PgPool) {
    let student_id = StudentRepo::create(&pool, &new_student("Asha", "CS001", 8.4, None))
        .await
        .unwrap();
    let company_id = CompanyRepo::create(&pool, &new_company("Acme")).await.unwrap();
    let jobrole_id = JobRoleRepo::create(&pool, &new_job_role(company_id, "SDE", 12.0))
        .await
        .unwrap();

    PlacementRepo::create(&pool, &new_placement(student_id, jobrole_id, None))
        .await
        .unwrap();
    let err = PlacementRepo::create(&pool, &new_placement(student_id, jobrole_id, Some("Placed")))
        .await
        .unwrap_err();
    assert_eq!(sqlstate(&err).as_deref(), Some("23505"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_cgpa_out_of_range_is_rejected(pool: PgPool) {
    let err = StudentRepo::create(&pool, &new_student("Asha", "CS001", 11.0, None))
        .await
        .unwrap_err();
    assert_eq!(sqlstate(&err).as_deref(), Some("23514"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_lists_are_empty_on_fresh_schema(pool: PgPool) {
    assert!(StudentRepo::list(&pool).await.unwrap().is_empty());
    assert!(DepartmentRepo::list(&pool).await.unwrap().is_empty());
    assert!(CompanyRepo::list(&pool).await.unwrap().is_empty());
    assert!(JobRoleRepo::list(&pool).await.unwrap().is_empty());
    assert!(PlacementRepo::list(&pool).await.unwrap().is_empty());
}
