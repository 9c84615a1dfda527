//! In-process read-through cache for entity snapshots.
//!
//! # Responsibility
//! - Hold per-id entity snapshots and named full-list snapshots.
//! - Support invalidate-on-write so no caller observes data staler than
//!   the last mutation made through the owning service.
//!
//! # Invariants
//! - List slots are keyed by a per-entity enum, never free-form strings.
//! - `put_list`/`get_list` copy the sequence both ways; caller mutation of
//!   a returned list can never corrupt cached state.
//! - Entries never expire on their own; the only removal paths are
//!   `remove`, `invalidate_lists` and `clear`.
//!
//! # Concurrency
//! Reads share the read lock and never block each other; a write locks only
//! the map it touches. A poisoned lock is recovered by taking the inner
//! value, since every critical section leaves the maps structurally valid.

use crate::model::EntityId;
use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::hash::Hash;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Observability snapshot of cache occupancy. Never used for correctness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStatus {
    pub item_count: usize,
    pub list_count: usize,
}

impl Display for CacheStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Items: {} | Lists: {}", self.item_count, self.list_count)
    }
}

/// Cache for one entity type: id-keyed snapshots plus named list snapshots.
///
/// `L` is the entity's list-key enum; `V` is the entity snapshot type.
pub struct EntityCache<L, V> {
    items: RwLock<HashMap<EntityId, V>>,
    lists: RwLock<HashMap<L, Vec<V>>>,
}

impl<L, V> EntityCache<L, V> {
    pub fn new() -> Self {
        Self {
            items: RwLock::new(HashMap::new()),
            lists: RwLock::new(HashMap::new()),
        }
    }
}

impl<L, V> Default for EntityCache<L, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L, V> EntityCache<L, V>
where
    L: Eq + Hash,
    V: Clone,
{
    /// Returns a copy of the cached snapshot, or `None` on a miss.
    pub fn get(&self, id: EntityId) -> Option<V> {
        read_lock(&self.items).get(&id).cloned()
    }

    /// Stores or replaces the snapshot for `id`.
    pub fn put(&self, id: EntityId, value: V) {
        write_lock(&self.items).insert(id, value);
    }

    /// Drops the snapshot for `id`. Missing ids are ignored.
    pub fn remove(&self, id: EntityId) {
        write_lock(&self.items).remove(&id);
    }

    pub fn contains(&self, id: EntityId) -> bool {
        read_lock(&self.items).contains_key(&id)
    }

    /// Returns a copy of the stored list snapshot, or `None` on a miss.
    pub fn get_list(&self, key: &L) -> Option<Vec<V>> {
        read_lock(&self.lists).get(key).cloned()
    }

    /// Stores a defensive copy of `values` under `key`.
    pub fn put_list(&self, key: L, values: &[V]) {
        write_lock(&self.lists).insert(key, values.to_vec());
    }

    /// Drops every list snapshot.
    ///
    /// Run after any create/update/delete: a single mutation can change
    /// membership, order, or count of every list view.
    pub fn invalidate_lists(&self) {
        write_lock(&self.lists).clear();
    }

    /// Drops all cached state, per-id and list slots alike.
    pub fn clear(&self) {
        write_lock(&self.items).clear();
        write_lock(&self.lists).clear();
    }

    pub fn status(&self) -> CacheStatus {
        CacheStatus {
            item_count: read_lock(&self.items).len(),
            list_count: read_lock(&self.lists).len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        let status = self.status();
        status.item_count == 0 && status.list_count == 0
    }
}

fn read_lock<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write_lock<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}
