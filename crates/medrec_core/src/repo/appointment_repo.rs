//! Appointment repository contract and SQLite implementation.
//!
//! Patient/doctor references are persisted as-is; the store's foreign keys
//! enforce existence and violations surface as storage errors.

use crate::model::appointment::{Appointment, AppointmentStatus};
use crate::model::EntityId;
use crate::repo::{RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

const APPOINTMENT_SELECT_SQL: &str = "SELECT
    id,
    patient_id,
    doctor_id,
    date,
    time,
    status
FROM appointments";

/// CRUD contract for appointments.
pub trait AppointmentRepository {
    /// Inserts one appointment and returns the storage-assigned id.
    fn create(&self, appointment: &Appointment) -> RepoResult<EntityId>;
    /// Absence is `Ok(None)`, never an error.
    fn find_by_id(&self, id: EntityId) -> RepoResult<Option<Appointment>>;
    /// Returns rows in storage order; callers must not depend on it.
    fn find_all(&self) -> RepoResult<Vec<Appointment>>;
    /// Overwrites all mutable fields; `NotFound` when the id does not exist.
    fn update(&self, appointment: &Appointment) -> RepoResult<()>;
    /// Idempotent; deleting a missing id succeeds.
    fn delete(&self, id: EntityId) -> RepoResult<()>;
}

/// SQLite-backed appointment repository.
pub struct SqliteAppointmentRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteAppointmentRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl AppointmentRepository for SqliteAppointmentRepository<'_> {
    fn create(&self, appointment: &Appointment) -> RepoResult<EntityId> {
        self.conn.execute(
            "INSERT INTO appointments (patient_id, doctor_id, date, time, status)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                appointment.patient_id,
                appointment.doctor_id,
                appointment.date,
                appointment.time,
                appointment.status.as_db_str(),
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn find_by_id(&self, id: EntityId) -> RepoResult<Option<Appointment>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{APPOINTMENT_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_appointment_row(row)?));
        }
        Ok(None)
    }

    fn find_all(&self) -> RepoResult<Vec<Appointment>> {
        let mut stmt = self.conn.prepare(&format!("{APPOINTMENT_SELECT_SQL};"))?;
        let mut rows = stmt.query([])?;
        let mut appointments = Vec::new();
        while let Some(row) = rows.next()? {
            appointments.push(parse_appointment_row(row)?);
        }
        Ok(appointments)
    }

    fn update(&self, appointment: &Appointment) -> RepoResult<()> {
        let id = appointment
            .id
            .ok_or_else(|| RepoError::InvalidData("appointment id missing for update".to_string()))?;

        let changed = self.conn.execute(
            "UPDATE appointments
             SET
                patient_id = ?1,
                doctor_id = ?2,
                date = ?3,
                time = ?4,
                status = ?5,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE id = ?6;",
            params![
                appointment.patient_id,
                appointment.doctor_id,
                appointment.date,
                appointment.time,
                appointment.status.as_db_str(),
                id,
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }
        Ok(())
    }

    fn delete(&self, id: EntityId) -> RepoResult<()> {
        self.conn
            .execute("DELETE FROM appointments WHERE id = ?1;", params![id])?;
        Ok(())
    }
}

fn parse_appointment_row(row: &Row<'_>) -> RepoResult<Appointment> {
    let status_text: String = row.get("status")?;
    let status = AppointmentStatus::from_db_str(&status_text).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid status value `{status_text}` in appointments.status"
        ))
    })?;

    Ok(Appointment {
        id: Some(row.get("id")?),
        patient_id: row.get("patient_id")?,
        doctor_id: row.get("doctor_id")?,
        date: row.get("date")?,
        time: row.get("time")?,
        status,
    })
}
