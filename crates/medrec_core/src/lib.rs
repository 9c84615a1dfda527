//! Core domain logic for hospital record management.
//! This crate is the single source of truth for business invariants:
//! sanitize-then-validate data entry, cache-backed entity repositories,
//! and the audit note sink.

pub mod audit;
pub mod cache;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;
pub mod validate;

pub use audit::{AuditError, AuditLog, AuditResult, AuditSink, MemoryAuditSink};
pub use cache::{CacheStatus, EntityCache};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::appointment::{Appointment, AppointmentStatus};
pub use model::audit::{Actor, AuditEntry};
pub use model::department::Department;
pub use model::doctor::Doctor;
pub use model::patient::{Gender, Patient};
pub use model::user::{Role, User};
pub use model::EntityId;
pub use repo::appointment_repo::{AppointmentRepository, SqliteAppointmentRepository};
pub use repo::department_repo::{DepartmentRepository, SqliteDepartmentRepository};
pub use repo::doctor_repo::{DoctorRepository, SqliteDoctorRepository};
pub use repo::patient_repo::{PatientRepository, SqlitePatientRepository};
pub use repo::user_repo::{SqliteUserRepository, UserRepository};
pub use repo::{RepoError, RepoResult};
pub use service::appointment_service::AppointmentService;
pub use service::department_service::{DepartmentListKey, DepartmentService};
pub use service::doctor_service::{DoctorListKey, DoctorService};
pub use service::patient_service::{PatientListKey, PatientService};
pub use service::user_service::UserService;
pub use validate::{sanitize, ValidationError, ValidationResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
