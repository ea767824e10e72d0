//! Infrastructure layer: file persistence and configuration.

pub mod config;
pub mod persistence;

pub use config::{AppConfig, ConfigError};
pub use persistence::{JsonSnapshotStore, PersistenceError};
