//! Delivery transport configuration

use serde::{Deserialize, Serialize};

use super::env_or;

/// Configuration for the outbound messaging transport
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DeliveryConfig {
    /// Name of the delivery provider implementation to use
    #[serde(default = "default_provider")]
    pub provider: String,

    /// Whether mock providers should echo messages to the console
    #[serde(default = "default_console_output")]
    pub console_output: bool,
}

fn default_provider() -> String {
    "mock".to_string()
}

fn default_console_output() -> bool {
    true
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            console_output: default_console_output(),
        }
    }
}

impl DeliveryConfig {
    /// Load the delivery configuration from `CODERELAY_DELIVERY_*`
    /// environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            provider: std::env::var("CODERELAY_DELIVERY_PROVIDER")
                .unwrap_or_else(|_| default_provider()),
            console_output: env_or("CODERELAY_DELIVERY_CONSOLE", default_console_output()),
        }
    }
}
