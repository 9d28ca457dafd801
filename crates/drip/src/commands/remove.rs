//! Module remove command

use anyhow::{Context, Result};
use camino::Utf8Path;
use drip_modules::ModuleRemover;

use super::resolve_layout;
use crate::cli::RemoveArgs;
use crate::output;

/// Remove an installed module
///
/// Dependents keep their records with the module dropped from their
/// dependency lists. The module's own dependencies stay installed.
pub fn run(args: RemoveArgs, project: Option<&Utf8Path>) -> Result<()> {
    let layout = resolve_layout(project)?;

    output::info(&format!("Removing module: {}", args.name));

    let summary = ModuleRemover::new(layout)
        .remove(&args.name)
        .with_context(|| format!("Failed to remove module '{}'", args.name))?;

    if !summary.record_removed {
        output::warning(&format!(
            "'{}' was installed but had no manifest record",
            summary.name
        ));
    }
    if !summary.scrubbed_from.is_empty() {
        output::kv("No longer a dependency of", &summary.scrubbed_from.join(", "));
    }

    output::success(&format!("Removed {}", summary.name));
    Ok(())
}
