//! Patient use-case service.
//!
//! # Responsibility
//! - Sanitize and validate patient input before persistence.
//! - Serve reads through the entity cache; invalidate on every write.
//!
//! # Invariants
//! - `register` never caches the created row; the next read fills lazily.
//! - List snapshots are invalidated in full on any mutation.

use crate::cache::{CacheStatus, EntityCache};
use crate::model::patient::Patient;
use crate::model::EntityId;
use crate::repo::patient_repo::PatientRepository;
use crate::repo::RepoResult;
use crate::validate::{
    require_date_of_birth, require_email, require_name, require_non_empty, require_phone,
    require_positive, sanitize, ValidationResult,
};
use log::debug;

/// Named list views cached for patients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatientListKey {
    All,
}

/// Service wrapper for patient CRUD with read-through caching.
pub struct PatientService<R: PatientRepository> {
    repo: R,
    cache: EntityCache<PatientListKey, Patient>,
}

impl<R: PatientRepository> PatientService<R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            cache: EntityCache::new(),
        }
    }

    /// Registers a new patient and returns the storage-assigned id.
    ///
    /// Pipeline: sanitize, validate, create, invalidate list snapshots.
    pub fn register(&self, patient: &mut Patient) -> RepoResult<EntityId> {
        sanitize_patient(patient);
        validate_patient(patient)?;

        let id = self.repo.create(patient)?;
        patient.id = Some(id);
        self.cache.invalidate_lists();
        debug!("event=patient_register module=patient_service status=ok id={id}");
        Ok(id)
    }

    /// Gets one patient by id, filling the cache on a store hit.
    pub fn get(&self, id: EntityId) -> RepoResult<Option<Patient>> {
        if let Some(hit) = self.cache.get(id) {
            debug!("event=cache_lookup module=patient_service status=hit id={id}");
            return Ok(Some(hit));
        }

        let found = self.repo.find_by_id(id)?;
        if let Some(patient) = &found {
            self.cache.put(id, patient.clone());
        }
        debug!("event=cache_lookup module=patient_service status=miss id={id}");
        Ok(found)
    }

    /// Lists all patients, serving from the list snapshot when present.
    pub fn get_all(&self) -> RepoResult<Vec<Patient>> {
        if let Some(cached) = self.cache.get_list(&PatientListKey::All) {
            debug!(
                "event=list_lookup module=patient_service status=hit rows={}",
                cached.len()
            );
            return Ok(cached);
        }

        let patients = self.repo.find_all()?;
        self.cache.put_list(PatientListKey::All, &patients);
        debug!(
            "event=list_lookup module=patient_service status=miss rows={}",
            patients.len()
        );
        Ok(patients)
    }

    /// Updates an existing patient; invalidation runs only after the write
    /// succeeds.
    pub fn update(&self, patient: &mut Patient) -> RepoResult<()> {
        sanitize_patient(patient);
        let id = require_positive(patient.id, "Patient ID")?;
        validate_patient(patient)?;

        self.repo.update(patient)?;
        self.cache.remove(id);
        self.cache.invalidate_lists();
        debug!("event=patient_update module=patient_service status=ok id={id}");
        Ok(())
    }

    /// Deletes by id; idempotent like the repository contract.
    pub fn delete(&self, id: EntityId) -> RepoResult<()> {
        self.repo.delete(id)?;
        self.cache.remove(id);
        self.cache.invalidate_lists();
        debug!("event=patient_delete module=patient_service status=ok id={id}");
        Ok(())
    }

    /// Cache occupancy, for observability only.
    pub fn cache_status(&self) -> CacheStatus {
        self.cache.status()
    }
}

fn sanitize_patient(patient: &mut Patient) {
    patient.first_name = sanitize(&patient.first_name);
    patient.last_name = sanitize(&patient.last_name);
    patient.email = sanitize(&patient.email);
    patient.phone = sanitize(&patient.phone);
    patient.address = sanitize(&patient.address);
}

fn validate_patient(patient: &Patient) -> ValidationResult {
    require_name(&patient.first_name, "First Name")?;
    require_name(&patient.last_name, "Last Name")?;
    require_email(&patient.email)?;
    require_phone(&patient.phone)?;
    require_date_of_birth(patient.dob)?;
    require_non_empty(&patient.address, "Address")?;
    Ok(())
}
