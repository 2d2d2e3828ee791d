use super::load_template;
use anyhow::Result;
use appflow::inspect_template;
use serde_json::Value;
use std::path::Path;

/// Prints the inspector attributes of every AppFlow resource in `path` as JSON.
///
/// # Errors
/// Returns an error if the template cannot be loaded or a resource fails to parse.
pub fn inspect_file(path: &Path) -> Result<()> {
    let template = load_template(path)?;
    let nodes = inspect_template(&template)?;
    println!("{}", serde_json::to_string_pretty(&Value::Object(nodes))?);
    Ok(())
}
