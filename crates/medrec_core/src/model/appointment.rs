//! Appointment entity and status closed set.

use crate::model::EntityId;
use crate::validate::{ValidationError, ValidationResult};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Closed set of appointment lifecycle states.
///
/// Unlike [`crate::model::patient::Gender`], parsing is case-sensitive:
/// only the exact capitalized forms are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    /// Parses caller input; exact match required.
    pub fn parse(value: &str) -> ValidationResult<Self> {
        Self::from_db_str(value).ok_or_else(|| {
            ValidationError::new("Status", "must be Scheduled, Completed, or Cancelled")
        })
    }

    /// Canonical persisted form.
    pub fn as_db_str(self) -> &'static str {
        match self {
            Self::Scheduled => "Scheduled",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Strict read-path parse of the persisted form.
    pub fn from_db_str(value: &str) -> Option<Self> {
        match value {
            "Scheduled" => Some(Self::Scheduled),
            "Completed" => Some(Self::Completed),
            "Cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }
}

/// A patient's booked visit with one doctor.
///
/// `patient_id`/`doctor_id` positivity is checked at the service layer;
/// referential existence is enforced by the store's foreign keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    /// Storage-assigned identifier; `None` until first persisted.
    pub id: Option<EntityId>,
    pub patient_id: EntityId,
    pub doctor_id: EntityId,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub status: AppointmentStatus,
}
