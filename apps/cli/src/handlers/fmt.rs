use super::load_template;
use anyhow::{Context, Result, bail};
use appflow::domain::config::AppConfig;
use appflow::{check_template, format_template};
use std::fs;
use std::path::Path;

/// Re-renders the AppFlow resources of `path` and writes the template to `output` or stdout.
///
/// # Errors
/// Returns an error if the template cannot be loaded, a resource fails to parse or (with
/// `synth.validate`) to validate, or the output cannot be written.
pub fn format_file(path: &Path, output: Option<&Path>, config: &AppConfig) -> Result<()> {
    let mut template = load_template(path)?;

    if config.synth.validate {
        let failures = check_template(&template)?;
        if let Some((id, report)) = failures.first() {
            bail!("{id} is invalid: {}", report.violations()[0]);
        }
    }

    let count = format_template(&mut template)?;
    let rendered = template.to_json_string(config.synth.pretty)?;

    match output {
        Some(output) => {
            fs::write(output, format!("{rendered}\n"))
                .with_context(|| format!("Failed to write {}", output.display()))?;
            tracing::info!(resources = count, output = %output.display(), "Template formatted");
        },
        None => println!("{rendered}"),
    }
    Ok(())
}
