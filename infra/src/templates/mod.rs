//! Template table loading
//!
//! The table is read once at process start and immutable thereafter.

use tracing::info;

use cr_core::errors::StorageError;
use cr_core::templates::TemplateTable;
use cr_shared::config::TemplateConfig;

/// Build the template table from the configuration
///
/// With no file configured, the built-in table is used as-is. A configured
/// file must exist and parse; its entries are layered over the built-ins,
/// so the `default` template is always available.
pub async fn load_template_table(config: &TemplateConfig) -> Result<TemplateTable, StorageError> {
    let table = match &config.path {
        None => TemplateTable::builtin(),
        Some(path) => {
            let bytes = tokio::fs::read(path)
                .await
                .map_err(|source| StorageError::Read { source })?;
            TemplateTable::from_json_slice(&bytes).map_err(|e| StorageError::Corrupt {
                message: format!("{} in {}", e, path.display()),
            })?
        }
    };

    info!(templates = table.len(), "Loaded template table");
    Ok(table)
}
