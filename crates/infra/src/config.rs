//! Configuration loading and representation.
//!
//! Values come from the process environment; anything unset falls back to a
//! default.

use std::path::PathBuf;

use thiserror::Error;

pub const SNAPSHOT_PATH_VAR: &str = "WAREHOUSE_SNAPSHOT_PATH";
pub const RESTOCK_AMOUNT_VAR: &str = "WAREHOUSE_RESTOCK_AMOUNT";
pub const EXPIRY_HORIZON_VAR: &str = "WAREHOUSE_EXPIRY_HORIZON_DAYS";

const DEFAULT_SNAPSHOT_FILE: &str = "inventory.json";
const DEFAULT_RESTOCK_AMOUNT: i64 = 5;
const DEFAULT_EXPIRY_HORIZON_DAYS: u64 = 14;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be an integer (got {value:?})")]
    InvalidInteger { var: &'static str, value: String },

    #[error("{var} must be a non-negative integer (got {value:?})")]
    InvalidDayCount { var: &'static str, value: String },
}

/// Runtime configuration for the warehouse binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Where the grocery snapshot is written and read back.
    pub snapshot_path: PathBuf,
    /// Units added by the restock step of the demo workflow.
    pub restock_amount: i64,
    /// Groceries expiring within this many days are reported as expired.
    pub expiry_horizon_days: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            snapshot_path: std::env::temp_dir().join(DEFAULT_SNAPSHOT_FILE),
            restock_amount: DEFAULT_RESTOCK_AMOUNT,
            expiry_horizon_days: DEFAULT_EXPIRY_HORIZON_DAYS,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from an arbitrary variable source (tests pass a closure over a map).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let snapshot_path = match lookup(SNAPSHOT_PATH_VAR) {
            Some(path) if !path.trim().is_empty() => PathBuf::from(path),
            _ => {
                tracing::warn!(
                    var = SNAPSHOT_PATH_VAR,
                    path = %defaults.snapshot_path.display(),
                    "snapshot path not set; using temp dir default"
                );
                defaults.snapshot_path
            }
        };

        let restock_amount = match lookup(RESTOCK_AMOUNT_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .map_err(|_| ConfigError::InvalidInteger {
                    var: RESTOCK_AMOUNT_VAR,
                    value: raw.clone(),
                })?,
            None => defaults.restock_amount,
        };

        let expiry_horizon_days = match lookup(EXPIRY_HORIZON_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidDayCount {
                    var: EXPIRY_HORIZON_VAR,
                    value: raw.clone(),
                })?,
            None => defaults.expiry_horizon_days,
        };

        Ok(Self {
            snapshot_path,
            restock_amount,
            expiry_horizon_days,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let cfg = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg, AppConfig::default());
        assert!(cfg.snapshot_path.ends_with("inventory.json"));
    }

    #[test]
    fn reads_overrides() {
        let cfg = AppConfig::from_lookup(lookup(&[
            (SNAPSHOT_PATH_VAR, "/var/lib/warehouse/stock.json"),
            (RESTOCK_AMOUNT_VAR, " 12 "),
            (EXPIRY_HORIZON_VAR, "3"),
        ]))
        .unwrap();
        assert_eq!(cfg.snapshot_path, PathBuf::from("/var/lib/warehouse/stock.json"));
        assert_eq!(cfg.restock_amount, 12);
        assert_eq!(cfg.expiry_horizon_days, 3);
    }

    #[test]
    fn rejects_negative_expiry_horizon() {
        let err = AppConfig::from_lookup(lookup(&[(EXPIRY_HORIZON_VAR, "-1")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidDayCount {
                var: EXPIRY_HORIZON_VAR,
                value: "-1".to_string(),
            }
        );
    }

    #[test]
    fn rejects_non_integer_restock_amount() {
        let err = AppConfig::from_lookup(lookup(&[(RESTOCK_AMOUNT_VAR, "lots")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidInteger {
                var: RESTOCK_AMOUNT_VAR,
                value: "lots".to_string(),
            }
        );
    }
}
