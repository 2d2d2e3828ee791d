pub mod fmt;
pub mod inspect;
pub mod schema;
pub mod validate;

use anyhow::{Context, Result};
use appflow::kernel::template::Template;
use std::fs;
use std::path::Path;

/// Reads and parses a JSON template.
///
/// # Errors
/// Returns an error if the file cannot be read or is not a template object.
pub fn load_template(path: &Path) -> Result<Template> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read template {}", path.display()))?;
    let template = Template::from_json(&raw)
        .with_context(|| format!("Failed to parse template {}", path.display()))?;
    tracing::debug!(path = %path.display(), "Template loaded");
    Ok(template)
}
