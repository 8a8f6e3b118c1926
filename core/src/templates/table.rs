//! Immutable template lookup table

use std::collections::HashMap;

/// Key of the fallback template used for unknown lookup keys
pub const DEFAULT_TEMPLATE_KEY: &str = "default";

/// Immutable mapping from template key to template text
///
/// The built-in table always contains the `default` key, so lookups can
/// never fail: an unknown key falls back to the default template.
#[derive(Debug, Clone)]
pub struct TemplateTable {
    templates: HashMap<String, String>,
}

impl TemplateTable {
    /// Table of built-in templates
    pub fn builtin() -> Self {
        let mut templates = HashMap::new();
        templates.insert(
            DEFAULT_TEMPLATE_KEY.to_string(),
            "Your verification code is {{otp}}. It expires in {{expiry}} minutes. - {{company}}"
                .to_string(),
        );
        templates.insert(
            "login".to_string(),
            "Hi {{name}}, use code {{otp}} to log in to {{company}}. It expires in {{expiry}} minutes."
                .to_string(),
        );
        templates.insert(
            "signup".to_string(),
            "Welcome to {{company}}! Confirm your number with code {{otp}} within {{expiry}} minutes."
                .to_string(),
        );
        Self { templates }
    }

    /// Build a table from a JSON object of `key -> template text`, layered on
    /// top of the built-ins
    ///
    /// Entries in the JSON override built-in templates with the same key, so
    /// a deployment can replace `default` or add its own keys. The `default`
    /// key is therefore always present.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        let overrides: HashMap<String, String> = serde_json::from_slice(bytes)?;
        let mut table = Self::builtin();
        table.templates.extend(overrides);
        Ok(table)
    }

    /// Look up a template, falling back to the default template for unknown
    /// keys
    pub fn get(&self, key: &str) -> &str {
        self.templates
            .get(key)
            .unwrap_or_else(|| &self.templates[DEFAULT_TEMPLATE_KEY])
    }

    /// Whether the table contains `key` itself (no fallback)
    pub fn contains(&self, key: &str) -> bool {
        self.templates.contains_key(key)
    }

    /// Number of templates in the table
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Whether the table is empty (never true for built-in-based tables)
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl Default for TemplateTable {
    fn default() -> Self {
        Self::builtin()
    }
}
