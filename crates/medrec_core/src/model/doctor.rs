//! Doctor entity.

use crate::model::EntityId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Practitioner assigned to one department.
///
/// `department_id` is checked for positivity at the service layer; the
/// referenced row's existence is enforced by the store's foreign key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    /// Storage-assigned identifier; `None` until first persisted.
    pub id: Option<EntityId>,
    pub first_name: String,
    pub last_name: String,
    pub department_id: EntityId,
    pub phone: String,
    pub email: String,
    pub hire_date: NaiveDate,
}
