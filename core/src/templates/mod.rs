//! Message templates
//!
//! Outbound OTP messages are rendered from an immutable table of named
//! templates using `{{name}}` placeholders. The table is built once at
//! startup (built-in defaults, optionally extended from a JSON file) and is
//! read-only thereafter.

mod renderer;
mod table;

pub use renderer::TemplateRenderer;
pub use table::{TemplateTable, DEFAULT_TEMPLATE_KEY};
