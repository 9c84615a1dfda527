//! Repository layer abstractions and SQLite implementations.
//!
//! # Responsibility
//! - Define per-entity CRUD contracts consumed by services.
//! - Isolate SQL details from service/business orchestration.
//!
//! # Invariants
//! - Repositories are cache-unaware; services own invalidation.
//! - Repositories do not validate input; services run the sanitize/validate
//!   pipeline before any repository write.
//! - `update` of a missing identifier is an explicit `NotFound`; `delete`
//!   of a missing identifier is a successful no-op. This policy is uniform
//!   across every entity type.
//! - Read paths reject invalid persisted state (`InvalidData`) instead of
//!   masking it.

use crate::db::DbError;
use crate::model::EntityId;
use crate::validate::ValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod appointment_repo;
pub mod department_repo;
pub mod doctor_repo;
pub mod patient_repo;
pub mod user_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Error surface shared by repositories and the services above them.
///
/// `Validation` never touches storage; `Db` propagates store failures
/// verbatim with no retry.
#[derive(Debug)]
pub enum RepoError {
    Validation(ValidationError),
    Db(DbError),
    NotFound(EntityId),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "record not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound(_) => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}
