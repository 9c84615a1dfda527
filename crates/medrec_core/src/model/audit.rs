//! Free-text audit note records for the secondary document sink.

use crate::model::EntityId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Explicit caller identity attached to audit writes.
///
/// Passed into every operation that records an entry; there is no ambient
/// "current user" global.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub username: String,
}

impl Actor {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }
}

/// Append-only note describing one action taken on a patient record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// Sink-side document identifier.
    pub id: Uuid,
    pub patient_id: EntityId,
    /// Short action label, e.g. `"register"` or `"update"`.
    pub action: String,
    /// Free-text detail; never parsed by this layer.
    pub details: String,
    /// Username of the actor that performed the action.
    pub performed_by: String,
    pub recorded_at: DateTime<Utc>,
}
