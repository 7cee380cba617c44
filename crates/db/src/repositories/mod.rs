//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` as the first argument.

pub mod application_repo;
pub mod company_repo;
pub mod department_repo;
pub mod job_role_repo;
pub mod placement_repo;
pub mod report_repo;
pub mod student_audit_repo;
pub mod student_repo;
pub mod view_repo;

pub use application_repo::ApplicationRepo;
pub use company_repo::CompanyRepo;
pub use department_repo::DepartmentRepo;
pub use job_role_repo::JobRoleRepo;
pub use placement_repo::PlacementRepo;
pub use report_repo::ReportRepo;
pub use student_audit_repo::StudentAuditRepo;
pub use student_repo::StudentRepo;
pub use view_repo::ViewRepo;
