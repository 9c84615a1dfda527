//! Patient repository contract and SQLite implementation.
//!
//! Email uniqueness lives in the store; a duplicate insert surfaces as a
//! storage error, not a validation failure.

use crate::model::patient::{Gender, Patient};
use crate::model::EntityId;
use crate::repo::{RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

const PATIENT_SELECT_SQL: &str = "SELECT
    id,
    first_name,
    last_name,
    dob,
    gender,
    email,
    phone,
    address
FROM patients";

/// CRUD contract for patients.
pub trait PatientRepository {
    /// Inserts one patient and returns the storage-assigned id.
    fn create(&self, patient: &Patient) -> RepoResult<EntityId>;
    /// Absence is `Ok(None)`, never an error.
    fn find_by_id(&self, id: EntityId) -> RepoResult<Option<Patient>>;
    /// Returns rows in storage order; callers must not depend on it.
    fn find_all(&self) -> RepoResult<Vec<Patient>>;
    /// Overwrites all mutable fields; `NotFound` when the id does not exist.
    fn update(&self, patient: &Patient) -> RepoResult<()>;
    /// Idempotent; deleting a missing id succeeds.
    fn delete(&self, id: EntityId) -> RepoResult<()>;
}

/// SQLite-backed patient repository.
pub struct SqlitePatientRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePatientRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl PatientRepository for SqlitePatientRepository<'_> {
    fn create(&self, patient: &Patient) -> RepoResult<EntityId> {
        self.conn.execute(
            "INSERT INTO patients (first_name, last_name, dob, gender, email, phone, address)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7);",
            params![
                patient.first_name,
                patient.last_name,
                patient.dob,
                patient.gender.as_db_str(),
                patient.email,
                patient.phone,
                patient.address,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn find_by_id(&self, id: EntityId) -> RepoResult<Option<Patient>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PATIENT_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_patient_row(row)?));
        }
        Ok(None)
    }

    fn find_all(&self) -> RepoResult<Vec<Patient>> {
        let mut stmt = self.conn.prepare(&format!("{PATIENT_SELECT_SQL};"))?;
        let mut rows = stmt.query([])?;
        let mut patients = Vec::new();
        while let Some(row) = rows.next()? {
            patients.push(parse_patient_row(row)?);
        }
        Ok(patients)
    }

    fn update(&self, patient: &Patient) -> RepoResult<()> {
        let id = patient
            .id
            .ok_or_else(|| RepoError::InvalidData("patient id missing for update".to_string()))?;

        let changed = self.conn.execute(
            "UPDATE patients
             SET
                first_name = ?1,
                last_name = ?2,
                dob = ?3,
                gender = ?4,
                email = ?5,
                phone = ?6,
                address = ?7,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE id = ?8;",
            params![
                patient.first_name,
                patient.last_name,
                patient.dob,
                patient.gender.as_db_str(),
                patient.email,
                patient.phone,
                patient.address,
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
            .execute("DELETE FROM patients WHERE id = ?1;", params![id])?;
        Ok(())
    }
}

fn parse_patient_row(row: &Row<'_>) -> RepoResult<Patient> {
    let gender_text: String = row.get("gender")?;
    let gender = Gender::from_db_str(&gender_text).ok_or_else(|| {
        RepoError::InvalidData(format!("invalid gender value `{gender_text}` in patients.gender"))
    })?;

    Ok(Patient {
        id: Some(row.get("id")?),
        first_name: row.get("first_name")?,
        last_name: row.get("last_name")?,
        dob: row.get("dob")?,
        gender,
        email: row.get("email")?,
        phone: row.get("phone")?,
        address: row.get("address")?,
    })
}
