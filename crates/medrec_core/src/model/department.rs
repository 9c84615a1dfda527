//! Department entity.

use crate::model::EntityId;
use serde::{Deserialize, Serialize};

/// Organizational unit that doctors belong to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    /// Storage-assigned identifier; `None` until first persisted.
    pub id: Option<EntityId>,
    pub name: String,
    /// Free text; may be empty.
    pub description: String,
}

impl Department {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: description.into(),
        }
    }
}
