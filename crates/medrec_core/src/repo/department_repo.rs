//! Department repository contract and SQLite implementation.

use crate::model::department::Department;
use crate::model::EntityId;
use crate::repo::{RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

const DEPARTMENT_SELECT_SQL: &str = "SELECT id, name, description FROM departments";

/// CRUD contract for departments.
pub trait DepartmentRepository {
    /// Inserts one department and returns the storage-assigned id.
    fn create(&self, department: &Department) -> RepoResult<EntityId>;
    /// Absence is `Ok(None)`, never an error.
    fn find_by_id(&self, id: EntityId) -> RepoResult<Option<Department>>;
    /// Returns rows in storage order; callers must not depend on it.
    fn find_all(&self) -> RepoResult<Vec<Department>>;
    /// Overwrites all mutable fields; `NotFound` when the id does not exist.
    fn update(&self, department: &Department) -> RepoResult<()>;
    /// Idempotent; deleting a missing id succeeds.
    fn delete(&self, id: EntityId) -> RepoResult<()>;
}

/// SQLite-backed department repository.
pub struct SqliteDepartmentRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteDepartmentRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl DepartmentRepository for SqliteDepartmentRepository<'_> {
    fn create(&self, department: &Department) -> RepoResult<EntityId> {
        self.conn.execute(
            "INSERT INTO departments (name, description) VALUES (?1, ?2);",
            params![department.name, department.description],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn find_by_id(&self, id: EntityId) -> RepoResult<Option<Department>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{DEPARTMENT_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_department_row(row)?));
        }
        Ok(None)
    }

    fn find_all(&self) -> RepoResult<Vec<Department>> {
        let mut stmt = self.conn.prepare(&format!("{DEPARTMENT_SELECT_SQL};"))?;
        let mut rows = stmt.query([])?;
        let mut departments = Vec::new();
        while let Some(row) = rows.next()? {
            departments.push(parse_department_row(row)?);
        }
        Ok(departments)
    }

    fn update(&self, department: &Department) -> RepoResult<()> {
        let id = department
            .id
            .ok_or_else(|| RepoError::InvalidData("department id missing for update".to_string()))?;

        let changed = self.conn.execute(
            "UPDATE departments
             SET
                name = ?1,
                description = ?2,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE id = ?3;",
            params![department.name, department.description, id],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }
        Ok(())
    }

    fn delete(&self, id: EntityId) -> RepoResult<()> {
        self.conn
            .execute("DELETE FROM departments WHERE id = ?1;", params![id])?;
        Ok(())
    }
}

fn parse_department_row(row: &Row<'_>) -> RepoResult<Department> {
    Ok(Department {
        id: Some(row.get("id")?),
        name: row.get("name")?,
        description: row.get("description")?,
    })
}
