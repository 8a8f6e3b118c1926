//! Message template table configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for the template table and standard rendering variables
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TemplateConfig {
    /// Optional JSON file overriding or extending the built-in templates.
    /// When absent, only the built-in table is used.
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Company name substituted for `{{company}}` when a request does not
    /// supply one
    #[serde(default = "default_company_name")]
    pub company_name: String,
}

fn default_company_name() -> String {
    "Your Company".to_string()
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            path: None,
            company_name: default_company_name(),
        }
    }
}

impl TemplateConfig {
    /// Load the template configuration from `CODERELAY_TEMPLATE_PATH` and
    /// `CODERELAY_COMPANY_NAME`, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            path: std::env::var("CODERELAY_TEMPLATE_PATH").ok().map(PathBuf::from),
            company_name: std::env::var("CODERELAY_COMPANY_NAME")
                .unwrap_or_else(|_| default_company_name()),
        }
    }
}
