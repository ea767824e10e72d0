use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use warehouse_core::{InventoryEntity, RepositoryError};
use warehouse_inventory::InventoryRepository;

/// Errors raised while saving or loading a snapshot.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("snapshot file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("snapshot io error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("snapshot json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The file decoded but its contents violate a repository invariant
    /// (duplicate id, negative quantity).
    #[error("snapshot rejected by repository: {0}")]
    Repository(#[from] RepositoryError),
}

/// Stores a repository as a JSON array of items.
#[derive(Debug, Clone)]
pub struct JsonSnapshotStore {
    path: PathBuf,
}

impl JsonSnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write every stored item, ordered by id, replacing any previous file.
    pub fn save<T>(&self, repo: &InventoryRepository<T>) -> Result<(), PersistenceError>
    where
        T: InventoryEntity + Clone + Serialize,
    {
        let mut items = repo.list_all();
        items.sort_by_key(|item| item.id());

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;
        }

        let json = serde_json::to_string_pretty(&items)?;
        fs::write(&self.path, json).map_err(|source| self.io_error(source))?;

        tracing::info!(path = %self.path.display(), items = items.len(), "snapshot saved");
        Ok(())
    }

    /// Read the file into a fresh repository.
    pub fn load<T>(&self) -> Result<InventoryRepository<T>, PersistenceError>
    where
        T: InventoryEntity + DeserializeOwned,
    {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::warn!(path = %self.path.display(), "snapshot file not found");
                return Err(PersistenceError::NotFound {
                    path: self.path.clone(),
                });
            }
            Err(source) => return Err(self.io_error(source)),
        };

        let items: Vec<T> = serde_json::from_str(&raw)?;
        let repo = InventoryRepository::from_items(items)?;

        tracing::info!(path = %self.path.display(), items = repo.len(), "snapshot loaded");
        Ok(repo)
    }

    fn io_error(&self, source: io::Error) -> PersistenceError {
        PersistenceError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
