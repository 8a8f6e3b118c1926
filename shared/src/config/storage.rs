//! Persisted OTP collection configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for the file-backed OTP store
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Path of the JSON file holding the serialized OTP collection
    #[serde(default = "default_path")]
    pub path: PathBuf,
}

fn default_path() -> PathBuf {
    PathBuf::from("data/otp_store.json")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}

impl StorageConfig {
    /// Load the storage configuration from `CODERELAY_STORAGE_PATH`,
    /// falling back to the default path.
    pub fn from_env() -> Self {
        Self {
            path: std::env::var("CODERELAY_STORAGE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| default_path()),
        }
    }
}
