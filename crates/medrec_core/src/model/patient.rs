//! Patient entity and gender closed set.

use crate::model::EntityId;
use crate::validate::{ValidationError, ValidationResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Closed set of accepted gender values.
///
/// Input parsing is case-insensitive; the persisted form is lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// Parses caller input; accepts any capitalization.
    pub fn parse(value: &str) -> ValidationResult<Self> {
        match value.trim().to_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            "other" => Ok(Self::Other),
            _ => Err(ValidationError::new(
                "Gender",
                "must be Male, Female, or Other",
            )),
        }
    }

    /// Canonical persisted form.
    pub fn as_db_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }

    /// Strict read-path parse of the persisted form.
    pub fn from_db_str(value: &str) -> Option<Self> {
        match value {
            "male" => Some(Self::Male),
            "female" => Some(Self::Female),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

/// Person receiving care.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    /// Storage-assigned identifier; `None` until first persisted.
    pub id: Option<EntityId>,
    pub first_name: String,
    pub last_name: String,
    pub dob: NaiveDate,
    pub gender: Gender,
    /// Unique across patients; uniqueness is enforced by the store.
    pub email: String,
    pub phone: String,
    pub address: String,
}
