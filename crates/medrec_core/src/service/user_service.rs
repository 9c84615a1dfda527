//! Staff account use-case service.
//!
//! Sign-in is a plain credential lookup; a failed match is reported as a
//! validation error so callers can show it next to the input form.

use crate::model::user::User;
use crate::model::EntityId;
use crate::repo::user_repo::UserRepository;
use crate::repo::{RepoError, RepoResult};
use crate::validate::{
    require_email, require_name, require_non_empty, require_positive, sanitize, ValidationError,
};
use log::debug;

/// Service wrapper for staff account CRUD and sign-in.
pub struct UserService<R: UserRepository> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Checks credentials and returns the matching account.
    ///
    /// A miss never reveals which of the two values was wrong.
    pub fn authenticate(&self, username: &str, password: &str) -> RepoResult<User> {
        require_non_empty(username, "Username")?;
        require_non_empty(password, "Password")?;

        match self.repo.authenticate(username, password)? {
            Some(user) => {
                debug!(
                    "event=sign_in module=user_service status=ok username={}",
                    user.username
                );
                Ok(user)
            }
            None => Err(RepoError::Validation(ValidationError::new(
                "Credentials",
                "invalid username or password",
            ))),
        }
    }

    /// Creates a new account and returns the storage-assigned id.
    pub fn register(&self, user: &mut User) -> RepoResult<EntityId> {
        sanitize_user(user);
        require_non_empty(&user.username, "Username")?;
        require_non_empty(&user.password, "Password")?;
        require_name(&user.first_name, "First Name")?;
        require_name(&user.last_name, "Last Name")?;
        require_email(&user.email)?;

        let id = self.repo.create(user)?;
        user.id = Some(id);
        debug!("event=user_register module=user_service status=ok id={id}");
        Ok(id)
    }

    pub fn get(&self, id: EntityId) -> RepoResult<Option<User>> {
        self.repo.find_by_id(id)
    }

    pub fn get_all(&self) -> RepoResult<Vec<User>> {
        self.repo.find_all()
    }

    /// Updates an existing account.
    pub fn update(&self, user: &mut User) -> RepoResult<()> {
        sanitize_user(user);
        let id = require_positive(user.id, "User ID")?;
        require_non_empty(&user.username, "Username")?;
        require_name(&user.first_name, "First Name")?;
        require_name(&user.last_name, "Last Name")?;
        require_email(&user.email)?;

        self.repo.update(user)?;
        debug!("event=user_update module=user_service status=ok id={id}");
        Ok(())
    }

    /// Deletes by id; idempotent like the repository contract.
    pub fn delete(&self, id: EntityId) -> RepoResult<()> {
        self.repo.delete(id)?;
        debug!("event=user_delete module=user_service status=ok id={id}");
        Ok(())
    }
}

fn sanitize_user(user: &mut User) {
    user.username = sanitize(&user.username);
    user.first_name = sanitize(&user.first_name);
    user.last_name = sanitize(&user.last_name);
    user.email = sanitize(&user.email);
}
