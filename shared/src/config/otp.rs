//! OTP lifecycle configuration

use serde::{Deserialize, Serialize};

use super::env_or;

/// Configuration for OTP generation and storage bounds
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OtpConfig {
    /// Maximum number of outstanding OTP records; the oldest-inserted record
    /// is evicted when a new issuance would exceed this bound
    #[serde(default = "default_capacity")]
    pub capacity: usize,

    /// Number of digits in a generated code when the caller does not ask for
    /// a specific length
    #[serde(default = "default_length")]
    pub default_length: usize,

    /// Minutes until a code expires when the caller does not supply a TTL
    #[serde(default = "default_ttl_minutes")]
    pub default_ttl_minutes: i64,
}

fn default_capacity() -> usize {
    10
}

fn default_length() -> usize {
    6
}

fn default_ttl_minutes() -> i64 {
    5
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            default_length: default_length(),
            default_ttl_minutes: default_ttl_minutes(),
        }
    }
}

impl OtpConfig {
    /// Load the OTP configuration from `CODERELAY_OTP_*` environment
    /// variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            capacity: env_or("CODERELAY_OTP_CAPACITY", default_capacity()),
            default_length: env_or("CODERELAY_OTP_LENGTH", default_length()),
            default_ttl_minutes: env_or("CODERELAY_OTP_TTL_MINUTES", default_ttl_minutes()),
        }
    }
}
