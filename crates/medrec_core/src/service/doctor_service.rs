//! Doctor use-case service.
//!
//! Department membership lists are cached per department id; any mutation
//! invalidates every list view, the per-department ones included, since a
//! single write can move a doctor between departments.

use crate::cache::{CacheStatus, EntityCache};
use crate::model::doctor::Doctor;
use crate::model::EntityId;
use crate::repo::doctor_repo::DoctorRepository;
use crate::repo::RepoResult;
use crate::validate::{
    require_email, require_name, require_phone, require_positive, sanitize, ValidationResult,
};
use log::debug;

/// Named list views cached for doctors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DoctorListKey {
    All,
    ByDepartment(EntityId),
}

/// Service wrapper for doctor CRUD with read-through caching.
pub struct DoctorService<R: DoctorRepository> {
    repo: R,
    cache: EntityCache<DoctorListKey, Doctor>,
}

impl<R: DoctorRepository> DoctorService<R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            cache: EntityCache::new(),
        }
    }

    /// Registers a new doctor and returns the storage-assigned id.
    pub fn register(&self, doctor: &mut Doctor) -> RepoResult<EntityId> {
        sanitize_doctor(doctor);
        validate_doctor(doctor)?;

        let id = self.repo.create(doctor)?;
        doctor.id = Some(id);
        self.cache.invalidate_lists();
        debug!("event=doctor_register module=doctor_service status=ok id={id}");
        Ok(id)
    }

    /// Gets one doctor by id, filling the cache on a store hit.
    pub fn get(&self, id: EntityId) -> RepoResult<Option<Doctor>> {
        if let Some(hit) = self.cache.get(id) {
            debug!("event=cache_lookup module=doctor_service status=hit id={id}");
            return Ok(Some(hit));
        }

        let found = self.repo.find_by_id(id)?;
        if let Some(doctor) = &found {
            self.cache.put(id, doctor.clone());
        }
        debug!("event=cache_lookup module=doctor_service status=miss id={id}");
        Ok(found)
    }

    /// Lists all doctors, serving from the list snapshot when present.
    pub fn get_all(&self) -> RepoResult<Vec<Doctor>> {
        if let Some(cached) = self.cache.get_list(&DoctorListKey::All) {
            debug!(
                "event=list_lookup module=doctor_service status=hit rows={}",
                cached.len()
            );
            return Ok(cached);
        }

        let doctors = self.repo.find_all()?;
        self.cache.put_list(DoctorListKey::All, &doctors);
        debug!(
            "event=list_lookup module=doctor_service status=miss rows={}",
            doctors.len()
        );
        Ok(doctors)
    }

    /// Lists doctors assigned to one department, cached per department.
    pub fn get_by_department(&self, department_id: EntityId) -> RepoResult<Vec<Doctor>> {
        let key = DoctorListKey::ByDepartment(department_id);
        if let Some(cached) = self.cache.get_list(&key) {
            debug!(
                "event=list_lookup module=doctor_service status=hit department_id={department_id} rows={}",
                cached.len()
            );
            return Ok(cached);
        }

        let doctors = self.repo.find_by_department(department_id)?;
        self.cache.put_list(key, &doctors);
        debug!(
            "event=list_lookup module=doctor_service status=miss department_id={department_id} rows={}",
            doctors.len()
        );
        Ok(doctors)
    }

    /// Updates an existing doctor; invalidation runs only after the write
    /// succeeds.
    pub fn update(&self, doctor: &mut Doctor) -> RepoResult<()> {
        sanitize_doctor(doctor);
        let id = require_positive(doctor.id, "Doctor ID")?;
        validate_doctor(doctor)?;

        self.repo.update(doctor)?;
        self.cache.remove(id);
        self.cache.invalidate_lists();
        debug!("event=doctor_update module=doctor_service status=ok id={id}");
        Ok(())
    }

    /// Deletes by id; idempotent like the repository contract.
    pub fn delete(&self, id: EntityId) -> RepoResult<()> {
        self.repo.delete(id)?;
        self.cache.remove(id);
        self.cache.invalidate_lists();
        debug!("event=doctor_delete module=doctor_service status=ok id={id}");
        Ok(())
    }

    /// Cache occupancy, for observability only.
    pub fn cache_status(&self) -> CacheStatus {
        self.cache.status()
    }
}

fn sanitize_doctor(doctor: &mut Doctor) {
    doctor.first_name = sanitize(&doctor.first_name);
    doctor.last_name = sanitize(&doctor.last_name);
    doctor.email = sanitize(&doctor.email);
    doctor.phone = sanitize(&doctor.phone);
}

fn validate_doctor(doctor: &Doctor) -> ValidationResult {
    require_name(&doctor.first_name, "First Name")?;
    require_name(&doctor.last_name, "Last Name")?;
    require_email(&doctor.email)?;
    require_phone(&doctor.phone)?;
    require_positive(Some(doctor.department_id), "Department ID")?;
    Ok(())
}
