//! Keyed in-memory repository with invariant enforcement.
//!
//! Invariants held before and after every operation:
//! - no two stored items share an id;
//! - every stored quantity is `>= 0`;
//! - an id keeps pointing at the same item until it is removed.
//!
//! Every operation is all-or-nothing: a rejected call leaves the mapping
//! untouched.

use std::collections::HashMap;

use warehouse_core::{InventoryEntity, ItemId, RepositoryError, RepositoryResult, ensure_non_negative};

/// Identity-keyed container of inventory items.
#[derive(Debug, Clone)]
pub struct InventoryRepository<T> {
    items: HashMap<ItemId, T>,
}

impl<T> InventoryRepository<T> {
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.items.contains_key(&id)
    }
}

impl<T> Default for InventoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: InventoryEntity> InventoryRepository<T> {
    /// Build a repository by inserting `items` one at a time.
    ///
    /// Stops at the first rejected item.
    pub fn from_items(items: impl IntoIterator<Item = T>) -> RepositoryResult<Self> {
        let mut repo = Self::new();
        for item in items {
            repo.insert(item)?;
        }
        Ok(repo)
    }

    /// Store a new item.
    ///
    /// Fails with `InvalidQuantity` if the item carries a negative quantity,
    /// otherwise with `DuplicateIdentity` if its id is already present.
    pub fn insert(&mut self, item: T) -> RepositoryResult<()> {
        let id = item.id();
        if let Err(err) = ensure_non_negative(item.quantity()) {
            tracing::debug!(%id, error = %err, "insert rejected");
            return Err(err);
        }
        if self.items.contains_key(&id) {
            tracing::debug!(%id, "insert rejected: duplicate identity");
            return Err(RepositoryError::duplicate(id));
        }
        self.items.insert(id, item);
        tracing::debug!(%id, "item inserted");
        Ok(())
    }

    /// Read-only view of the item stored under `id`.
    pub fn get_by_id(&self, id: ItemId) -> RepositoryResult<&T> {
        self.items.get(&id).ok_or_else(|| RepositoryError::not_found(id))
    }

    /// Remove and return the item stored under `id`.
    ///
    /// Not idempotent: a second call for the same id fails with `NotFound`.
    pub fn remove(&mut self, id: ItemId) -> RepositoryResult<T> {
        match self.items.remove(&id) {
            Some(item) => {
                tracing::debug!(%id, "item removed");
                Ok(item)
            }
            None => {
                tracing::debug!(%id, "remove rejected: not found");
                Err(RepositoryError::not_found(id))
            }
        }
    }

    /// Replace the stored quantity of `id`.
    ///
    /// The range check runs before the existence check, so a negative
    /// quantity yields `InvalidQuantity` even when `id` is absent.
    pub fn update_quantity(&mut self, id: ItemId, new_quantity: i64) -> RepositoryResult<()> {
        let quantity = ensure_non_negative(new_quantity).inspect_err(|err| {
            tracing::debug!(%id, error = %err, "quantity update rejected");
        })?;
        let item = self.items.get_mut(&id).ok_or_else(|| {
            tracing::debug!(%id, "quantity update rejected: not found");
            RepositoryError::not_found(id)
        })?;
        item.set_quantity(quantity);
        tracing::debug!(%id, quantity, "quantity updated");
        Ok(())
    }

    /// Iterate stored items without cloning (unspecified order).
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.values()
    }
}

impl<T: InventoryEntity + Clone> InventoryRepository<T> {
    /// Snapshot of every stored item. Order is unspecified.
    pub fn list_all(&self) -> Vec<T> {
        self.items.values().cloned().collect()
    }
}
