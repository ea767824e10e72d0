//! Snapshot persistence adapters.
//!
//! Adapters only iterate `list_all()` on save and bulk-populate a fresh
//! repository through `insert` on load, so every invariant is re-checked when
//! data comes back in.

pub mod json_file;

pub use json_file::{JsonSnapshotStore, PersistenceError};
