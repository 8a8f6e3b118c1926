//! Configuration for the OTP service

use cr_shared::config::{OtpConfig, TemplateConfig};

/// Configuration for the OTP service
#[derive(Debug, Clone)]
pub struct OtpServiceConfig {
    /// Number of digits generated when a request does not specify a length
    pub default_length: usize,
    /// Minutes until expiry when a request does not specify a TTL
    pub default_ttl_minutes: i64,
    /// Company name substituted when a request does not supply one
    pub company_name: String,
}

impl Default for OtpServiceConfig {
    fn default() -> Self {
        Self {
            default_length: 6,
            default_ttl_minutes: 5,
            company_name: "Your Company".to_string(),
        }
    }
}

impl OtpServiceConfig {
    /// Build the service configuration from the shared application config
    pub fn from_app_config(otp: &OtpConfig, template: &TemplateConfig) -> Self {
        Self {
            default_length: otp.default_length,
            default_ttl_minutes: otp.default_ttl_minutes,
            company_name: template.company_name.clone(),
        }
    }
}
