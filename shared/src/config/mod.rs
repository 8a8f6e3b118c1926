//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `otp` - OTP generation, capacity, and expiry configuration
//! - `storage` - Persisted OTP collection configuration
//! - `template` - Message template table configuration
//! - `delivery` - Messaging transport configuration
//!
//! Every sub-configuration carries sensible defaults and can be overridden
//! from `CODERELAY_*` environment variables via `from_env()`.

pub mod delivery;
pub mod otp;
pub mod storage;
pub mod template;

use serde::{Deserialize, Serialize};

pub use delivery::DeliveryConfig;
pub use otp::OtpConfig;
pub use storage::StorageConfig;
pub use template::TemplateConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// OTP lifecycle configuration
    #[serde(default)]
    pub otp: OtpConfig,

    /// Storage configuration
    #[serde(default)]
    pub storage: StorageConfig,

    /// Template table configuration
    #[serde(default)]
    pub template: TemplateConfig,

    /// Delivery transport configuration
    #[serde(default)]
    pub delivery: DeliveryConfig,
}

impl AppConfig {
    /// Build the full configuration from environment variables, falling back
    /// to defaults for anything unset.
    pub fn from_env() -> Self {
        Self {
            otp: OtpConfig::from_env(),
            storage: StorageConfig::from_env(),
            template: TemplateConfig::from_env(),
            delivery: DeliveryConfig::from_env(),
        }
    }
}

/// Read an environment variable and parse it, falling back to `default`
/// when the variable is unset or unparsable.
pub(crate) fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
