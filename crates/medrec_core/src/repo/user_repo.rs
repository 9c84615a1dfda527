//! Staff account repository contract and SQLite implementation.
//!
//! Credential comparison is a plain equality match in the store; see the
//! schema note in `0002_users.sql`.

use crate::model::user::{Role, User};
use crate::model::EntityId;
use crate::repo::{RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

const USER_SELECT_SQL: &str = "SELECT
    id,
    username,
    password,
    role,
    first_name,
    last_name,
    email
FROM users";

/// CRUD plus sign-in lookup for staff accounts.
pub trait UserRepository {
    /// Inserts one user and returns the storage-assigned id.
    fn create(&self, user: &User) -> RepoResult<EntityId>;
    /// Absence is `Ok(None)`, never an error.
    fn find_by_id(&self, id: EntityId) -> RepoResult<Option<User>>;
    /// Returns rows in storage order; callers must not depend on it.
    fn find_all(&self) -> RepoResult<Vec<User>>;
    /// Plain-value credential match; a miss is `Ok(None)`.
    fn authenticate(&self, username: &str, password: &str) -> RepoResult<Option<User>>;
    /// Overwrites all mutable fields; `NotFound` when the id does not exist.
    fn update(&self, user: &User) -> RepoResult<()>;
    /// Idempotent; deleting a missing id succeeds.
    fn delete(&self, id: EntityId) -> RepoResult<()>;
}

/// SQLite-backed staff account repository.
pub struct SqliteUserRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteUserRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl UserRepository for SqliteUserRepository<'_> {
    fn create(&self, user: &User) -> RepoResult<EntityId> {
        self.conn.execute(
            "INSERT INTO users (username, password, role, first_name, last_name, email)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                user.username,
                user.password,
                user.role.as_db_str(),
                user.first_name,
                user.last_name,
                user.email,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn find_by_id(&self, id: EntityId) -> RepoResult<Option<User>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{USER_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_user_row(row)?));
        }
        Ok(None)
    }

    fn find_all(&self) -> RepoResult<Vec<User>> {
        let mut stmt = self.conn.prepare(&format!("{USER_SELECT_SQL};"))?;
        let mut rows = stmt.query([])?;
        let mut users = Vec::new();
        while let Some(row) = rows.next()? {
            users.push(parse_user_row(row)?);
        }
        Ok(users)
    }

    fn authenticate(&self, username: &str, password: &str) -> RepoResult<Option<User>> {
        let mut stmt = self.conn.prepare(&format!(
            "{USER_SELECT_SQL} WHERE username = ?1 AND password = ?2;"
        ))?;
        let mut rows = stmt.query(params![username, password])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_user_row(row)?));
        }
        Ok(None)
    }

    fn update(&self, user: &User) -> RepoResult<()> {
        let id = user
            .id
            .ok_or_else(|| RepoError::InvalidData("user id missing for update".to_string()))?;

        let changed = self.conn.execute(
            "UPDATE users
             SET
                username = ?1,
                password = ?2,
                role = ?3,
                first_name = ?4,
                last_name = ?5,
                email = ?6,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE id = ?7;",
            params![
                user.username,
                user.password,
                user.role.as_db_str(),
                user.first_name,
                user.last_name,
                user.email,
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
            .execute("DELETE FROM users WHERE id = ?1;", params![id])?;
        Ok(())
    }
}

fn parse_user_row(row: &Row<'_>) -> RepoResult<User> {
    let role_text: String = row.get("role")?;
    let role = Role::from_db_str(&role_text).ok_or_else(|| {
        RepoError::InvalidData(format!("invalid role value `{role_text}` in users.role"))
    })?;

    Ok(User {
        id: Some(row.get("id")?),
        username: row.get("username")?,
        password: row.get("password")?,
        role,
        first_name: row.get("first_name")?,
        last_name: row.get("last_name")?,
        email: row.get("email")?,
    })
}
