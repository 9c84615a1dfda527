//! Department use-case service.

use crate::cache::{CacheStatus, EntityCache};
use crate::model::department::Department;
use crate::model::EntityId;
use crate::repo::department_repo::DepartmentRepository;
use crate::repo::RepoResult;
use crate::validate::{require_non_empty, require_positive, sanitize};
use log::debug;

/// Named list views cached for departments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DepartmentListKey {
    All,
}

/// Service wrapper for department CRUD with read-through caching.
pub struct DepartmentService<R: DepartmentRepository> {
    repo: R,
    cache: EntityCache<DepartmentListKey, Department>,
}

impl<R: DepartmentRepository> DepartmentService<R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            cache: EntityCache::new(),
        }
    }

    /// Registers a new department and returns the storage-assigned id.
    pub fn register(&self, department: &mut Department) -> RepoResult<EntityId> {
        sanitize_department(department);
        require_non_empty(&department.name, "Department Name")?;

        let id = self.repo.create(department)?;
        department.id = Some(id);
        self.cache.invalidate_lists();
        debug!("event=department_register module=department_service status=ok id={id}");
        Ok(id)
    }

    /// Gets one department by id, filling the cache on a store hit.
    pub fn get(&self, id: EntityId) -> RepoResult<Option<Department>> {
        if let Some(hit) = self.cache.get(id) {
            debug!("event=cache_lookup module=department_service status=hit id={id}");
            return Ok(Some(hit));
        }

        let found = self.repo.find_by_id(id)?;
        if let Some(department) = &found {
            self.cache.put(id, department.clone());
        }
        debug!("event=cache_lookup module=department_service status=miss id={id}");
        Ok(found)
    }

    /// Lists all departments, serving from the list snapshot when present.
    pub fn get_all(&self) -> RepoResult<Vec<Department>> {
        if let Some(cached) = self.cache.get_list(&DepartmentListKey::All) {
            debug!(
                "event=list_lookup module=department_service status=hit rows={}",
                cached.len()
            );
            return Ok(cached);
        }

        let departments = self.repo.find_all()?;
        self.cache.put_list(DepartmentListKey::All, &departments);
        debug!(
            "event=list_lookup module=department_service status=miss rows={}",
            departments.len()
        );
        Ok(departments)
    }

    /// Updates an existing department; invalidation runs only after the
    /// write succeeds.
    pub fn update(&self, department: &mut Department) -> RepoResult<()> {
        sanitize_department(department);
        let id = require_positive(department.id, "Department ID")?;
        require_non_empty(&department.name, "Department Name")?;

        self.repo.update(department)?;
        self.cache.remove(id);
        self.cache.invalidate_lists();
        debug!("event=department_update module=department_service status=ok id={id}");
        Ok(())
    }

    /// Deletes by id; idempotent like the repository contract.
    pub fn delete(&self, id: EntityId) -> RepoResult<()> {
        self.repo.delete(id)?;
        self.cache.remove(id);
        self.cache.invalidate_lists();
        debug!("event=department_delete module=department_service status=ok id={id}");
        Ok(())
    }

    /// Cache occupancy, for observability only.
    pub fn cache_status(&self) -> CacheStatus {
        self.cache.status()
    }
}

fn sanitize_department(department: &mut Department) {
    department.name = sanitize(&department.name);
    department.description = sanitize(&department.description);
}
