//! Appointment use-case service.
//!
//! Appointments carry no read-through cache: booking views are short-lived
//! and always re-read, so every read goes straight to the repository.

use crate::model::appointment::{Appointment, AppointmentStatus};
use crate::model::EntityId;
use crate::repo::appointment_repo::AppointmentRepository;
use crate::repo::RepoResult;
use crate::validate::{require_positive, ValidationResult};
use log::debug;

/// Service wrapper for appointment scheduling and lifecycle changes.
pub struct AppointmentService<R: AppointmentRepository> {
    repo: R,
}

impl<R: AppointmentRepository> AppointmentService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Schedules a new appointment and returns the storage-assigned id.
    ///
    /// Only positivity of the patient/doctor references is checked here;
    /// their existence is the store's foreign-key concern.
    pub fn schedule(&self, appointment: &mut Appointment) -> RepoResult<EntityId> {
        validate_references(appointment)?;

        let id = self.repo.create(appointment)?;
        appointment.id = Some(id);
        debug!("event=appointment_schedule module=appointment_service status=ok id={id}");
        Ok(id)
    }

    pub fn get(&self, id: EntityId) -> RepoResult<Option<Appointment>> {
        self.repo.find_by_id(id)
    }

    pub fn get_all(&self) -> RepoResult<Vec<Appointment>> {
        self.repo.find_all()
    }

    /// Updates an existing appointment in place.
    pub fn update(&self, appointment: &Appointment) -> RepoResult<()> {
        let id = require_positive(appointment.id, "Appointment ID")?;
        validate_references(appointment)?;

        self.repo.update(appointment)?;
        debug!("event=appointment_update module=appointment_service status=ok id={id}");
        Ok(())
    }

    /// Marks the appointment `Cancelled` by rewriting the existing row.
    ///
    /// A missing id is a silent no-op, mirroring the delete contract; no
    /// new row is ever created by cancellation.
    pub fn cancel(&self, id: EntityId) -> RepoResult<()> {
        if let Some(mut appointment) = self.repo.find_by_id(id)? {
            appointment.status = AppointmentStatus::Cancelled;
            self.repo.update(&appointment)?;
            debug!("event=appointment_cancel module=appointment_service status=ok id={id}");
        }
        Ok(())
    }

    /// Deletes by id; idempotent like the repository contract.
    pub fn delete(&self, id: EntityId) -> RepoResult<()> {
        self.repo.delete(id)?;
        debug!("event=appointment_delete module=appointment_service status=ok id={id}");
        Ok(())
    }
}

fn validate_references(appointment: &Appointment) -> ValidationResult {
    require_positive(Some(appointment.patient_id), "Patient ID")?;
    require_positive(Some(appointment.doctor_id), "Doctor ID")?;
    Ok(())
}
