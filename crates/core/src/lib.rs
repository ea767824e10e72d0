//! `warehouse-core`: domain primitives shared by the inventory crates.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod entity;
pub mod error;
pub mod id;
pub mod quantity;

pub use entity::InventoryEntity;
pub use error::{RepositoryError, RepositoryErrorKind, RepositoryResult};
pub use id::ItemId;
pub use quantity::{apply_delta, ensure_non_negative};
