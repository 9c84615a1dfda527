//! Doctor repository contract and SQLite implementation.
//!
//! The department reference is persisted as-is; the store's foreign key
//! enforces existence and violations surface as storage errors.

use crate::model::doctor::Doctor;
use crate::model::EntityId;
use crate::repo::{RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

const DOCTOR_SELECT_SQL: &str = "SELECT
    id,
    first_name,
    last_name,
    department_id,
    phone,
    email,
    hire_date
FROM doctors";

/// CRUD contract for doctors.
pub trait DoctorRepository {
    /// Inserts one doctor and returns the storage-assigned id.
    fn create(&self, doctor: &Doctor) -> RepoResult<EntityId>;
    /// Absence is `Ok(None)`, never an error.
    fn find_by_id(&self, id: EntityId) -> RepoResult<Option<Doctor>>;
    /// Returns rows in storage order; callers must not depend on it.
    fn find_all(&self) -> RepoResult<Vec<Doctor>>;
    /// Doctors assigned to one department, in storage order.
    fn find_by_department(&self, department_id: EntityId) -> RepoResult<Vec<Doctor>>;
    /// Overwrites all mutable fields; `NotFound` when the id does not exist.
    fn update(&self, doctor: &Doctor) -> RepoResult<()>;
    /// Idempotent; deleting a missing id succeeds.
    fn delete(&self, id: EntityId) -> RepoResult<()>;
}

/// SQLite-backed doctor repository.
pub struct SqliteDoctorRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteDoctorRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl DoctorRepository for SqliteDoctorRepository<'_> {
    fn create(&self, doctor: &Doctor) -> RepoResult<EntityId> {
        self.conn.execute(
            "INSERT INTO doctors (first_name, last_name, department_id, phone, email, hire_date)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                doctor.first_name,
                doctor.last_name,
                doctor.department_id,
                doctor.phone,
                doctor.email,
                doctor.hire_date,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn find_by_id(&self, id: EntityId) -> RepoResult<Option<Doctor>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{DOCTOR_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_doctor_row(row)?));
        }
        Ok(None)
    }

    fn find_all(&self) -> RepoResult<Vec<Doctor>> {
        let mut stmt = self.conn.prepare(&format!("{DOCTOR_SELECT_SQL};"))?;
        let mut rows = stmt.query([])?;
        let mut doctors = Vec::new();
        while let Some(row) = rows.next()? {
            doctors.push(parse_doctor_row(row)?);
        }
        Ok(doctors)
    }

    fn find_by_department(&self, department_id: EntityId) -> RepoResult<Vec<Doctor>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{DOCTOR_SELECT_SQL} WHERE department_id = ?1;"))?;
        let mut rows = stmt.query(params![department_id])?;
        let mut doctors = Vec::new();
        while let Some(row) = rows.next()? {
            doctors.push(parse_doctor_row(row)?);
        }
        Ok(doctors)
    }

    fn update(&self, doctor: &Doctor) -> RepoResult<()> {
        let id = doctor
            .id
            .ok_or_else(|| RepoError::InvalidData("doctor id missing for update".to_string()))?;

        let changed = self.conn.execute(
            "UPDATE doctors
             SET
                first_name = ?1,
                last_name = ?2,
                department_id = ?3,
                phone = ?4,
                email = ?5,
                hire_date = ?6,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE id = ?7;",
            params![
                doctor.first_name,
                doctor.last_name,
                doctor.department_id,
                doctor.phone,
                doctor.email,
                doctor.hire_date,
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
            .execute("DELETE FROM doctors WHERE id = ?1;", params![id])?;
        Ok(())
    }
}

fn parse_doctor_row(row: &Row<'_>) -> RepoResult<Doctor> {
    Ok(Doctor {
        id: Some(row.get("id")?),
        first_name: row.get("first_name")?,
        last_name: row.get("last_name")?,
        department_id: row.get("department_id")?,
        phone: row.get("phone")?,
        email: row.get("email")?,
        hire_date: row.get("hire_date")?,
    })
}
