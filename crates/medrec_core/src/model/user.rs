//! Staff account entity and role closed set.

use crate::model::EntityId;
use crate::validate::{ValidationError, ValidationResult};
use serde::{Deserialize, Serialize};

/// Closed set of staff roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    Receptionist,
}

impl Role {
    /// Parses caller input; accepts any capitalization.
    pub fn parse(value: &str) -> ValidationResult<Self> {
        match value.trim().to_uppercase().as_str() {
            "ADMIN" => Ok(Self::Admin),
            "RECEPTIONIST" => Ok(Self::Receptionist),
            _ => Err(ValidationError::new(
                "Role",
                "must be Admin or Receptionist",
            )),
        }
    }

    /// Canonical persisted form.
    pub fn as_db_str(self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Receptionist => "RECEPTIONIST",
        }
    }

    /// Strict read-path parse of the persisted form.
    pub fn from_db_str(value: &str) -> Option<Self> {
        match value {
            "ADMIN" => Some(Self::Admin),
            "RECEPTIONIST" => Some(Self::Receptionist),
            _ => None,
        }
    }
}

/// Sign-in account for the caller surface.
///
/// Credentials are plain values by deliberate scope choice; no hashing or
/// challenge protocol lives in this layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Storage-assigned identifier; `None` until first persisted.
    pub id: Option<EntityId>,
    /// Unique across users; uniqueness is enforced by the store.
    pub username: String,
    pub password: String,
    pub role: Role,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}
