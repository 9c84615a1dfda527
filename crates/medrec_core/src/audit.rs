//! Append-only audit note sink for patient records.
//!
//! # Responsibility
//! - Produce structured free-text entries keyed by patient id and an
//!   explicit caller identity.
//! - Define the seam the document-store implementation plugs into.
//!
//! # Invariants
//! - This layer only appends; nothing here reads the sink back for cache
//!   or validation decisions.
//! - Every entry carries the actor that performed the action; there is no
//!   ambient "current user".

use crate::model::audit::{Actor, AuditEntry};
use crate::model::EntityId;
use chrono::Utc;
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{PoisonError, RwLock};
use uuid::Uuid;

pub type AuditResult<T> = Result<T, AuditError>;

/// Sink transport failure; carries the backend's own message verbatim.
#[derive(Debug)]
pub enum AuditError {
    Sink(String),
}

impl Display for AuditError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sink(message) => write!(f, "audit sink failure: {message}"),
        }
    }
}

impl Error for AuditError {}

/// Boundary contract for the secondary document store.
pub trait AuditSink {
    /// Appends one entry. Entries are never updated or removed.
    fn append(&self, entry: &AuditEntry) -> AuditResult<()>;
    /// All entries recorded for one patient, oldest first.
    fn for_patient(&self, patient_id: EntityId) -> AuditResult<Vec<AuditEntry>>;
}

/// In-process sink used by tests and single-machine deployments.
#[derive(Default)]
pub struct MemoryAuditSink {
    entries: RwLock<Vec<AuditEntry>>,
}

impl MemoryAuditSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AuditSink for MemoryAuditSink {
    fn append(&self, entry: &AuditEntry) -> AuditResult<()> {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(entry.clone());
        Ok(())
    }

    fn for_patient(&self, patient_id: EntityId) -> AuditResult<Vec<AuditEntry>> {
        Ok(self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|entry| entry.patient_id == patient_id)
            .cloned()
            .collect())
    }
}

/// Use-case wrapper that stamps identity and time onto entries.
pub struct AuditLog<S: AuditSink> {
    sink: S,
}

impl<S: AuditSink> AuditLog<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Records one action against a patient on behalf of `actor`.
    pub fn record(
        &self,
        actor: &Actor,
        patient_id: EntityId,
        action: impl Into<String>,
        details: impl Into<String>,
    ) -> AuditResult<AuditEntry> {
        let entry = AuditEntry {
            id: Uuid::new_v4(),
            patient_id,
            action: action.into(),
            details: details.into(),
            performed_by: actor.username.clone(),
            recorded_at: Utc::now(),
        };
        self.sink.append(&entry)?;
        debug!(
            "event=audit_record module=audit status=ok patient_id={patient_id} action={} actor={}",
            entry.action, entry.performed_by
        );
        Ok(entry)
    }

    /// Reads back the trail for one patient, for display only.
    pub fn for_patient(&self, patient_id: EntityId) -> AuditResult<Vec<AuditEntry>> {
        self.sink.for_patient(patient_id)
    }
}
