//! Lock-guarded repository handle for hosts that share one repository across
//! threads.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use warehouse_core::{InventoryEntity, ItemId, RepositoryResult, apply_delta};

use crate::repository::InventoryRepository;

/// Cloneable handle to a single repository guarded by one mutex.
///
/// Each operation holds the lock end-to-end, so two interleaved inserts or
/// removals of the same id cannot both succeed.
#[derive(Debug)]
pub struct SharedRepository<T> {
    inner: Arc<Mutex<InventoryRepository<T>>>,
}

impl<T> Clone for SharedRepository<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for SharedRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SharedRepository<T> {
    pub fn new() -> Self {
        Self::from_repository(InventoryRepository::new())
    }

    pub fn from_repository(repo: InventoryRepository<T>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(repo)),
        }
    }

    // Operations never leave the map half-mutated, so a poisoned lock still
    // guards a consistent repository.
    fn lock(&self) -> MutexGuard<'_, InventoryRepository<T>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl<T: InventoryEntity + Clone> SharedRepository<T> {
    pub fn insert(&self, item: T) -> RepositoryResult<()> {
        self.lock().insert(item)
    }

    /// Returns a copy; changes to it do not reach the stored item.
    pub fn get_by_id(&self, id: ItemId) -> RepositoryResult<T> {
        self.lock().get_by_id(id).cloned()
    }

    pub fn remove(&self, id: ItemId) -> RepositoryResult<T> {
        self.lock().remove(id)
    }

    pub fn update_quantity(&self, id: ItemId, new_quantity: i64) -> RepositoryResult<()> {
        self.lock().update_quantity(id, new_quantity)
    }

    /// Add `delta` to the stored quantity under a single lock acquisition.
    ///
    /// Returns the new quantity.
    pub fn adjust_quantity(&self, id: ItemId, delta: i64) -> RepositoryResult<i64> {
        let mut repo = self.lock();
        let current = repo.get_by_id(id)?.quantity();
        let next = apply_delta(current, delta)?;
        repo.update_quantity(id, next)?;
        Ok(next)
    }

    pub fn list_all(&self) -> Vec<T> {
        self.lock().list_all()
    }
}
