use super::load_template;
use anyhow::{Result, bail};
use appflow::check_template;
use std::path::Path;

/// Checks every AppFlow resource in `path` and prints one line per violation.
///
/// # Errors
/// Returns an error if the template cannot be loaded or any resource has violations.
pub fn validate_file(path: &Path) -> Result<()> {
    let template = load_template(path)?;
    let failures = check_template(&template)?;

    if failures.is_empty() {
        println!("✅ {} is valid", path.display());
        return Ok(());
    }

    let mut total = 0;
    for (id, report) in &failures {
        for violation in report.violations() {
            println!("{id}: {violation}");
            total += 1;
        }
    }
    bail!("{total} violation(s) in {} resource(s)", failures.len())
}
