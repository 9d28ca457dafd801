//! Module list command

use anyhow::{Context, Result};
use camino::Utf8Path;
use drip_modules::{ModuleLister, ModuleListing};
use tabled::{
    settings::{object::Columns, Modify, Style, Width},
    Table, Tabled,
};

use super::resolve_layout;
use crate::cli::ListArgs;
use crate::output;

/// Row for installed modules
#[derive(Tabled)]
struct ModuleRow {
    name: String,
    version: String,
    source: String,
    installed: String,
    dependencies: String,
}

impl From<ModuleListing> for ModuleRow {
    fn from(listing: ModuleListing) -> Self {
        let dependencies = if listing.dependencies.is_empty() {
            "-".to_string()
        } else {
            listing.dependencies.join(", ")
        };
        Self {
            name: listing.name,
            version: listing.version,
            source: listing.source,
            installed: listing.installed.to_string(),
            dependencies,
        }
    }
}

/// List installed modules
///
/// Supports:
/// - Table output: `drip list`
/// - JSON output: `drip list --json`
pub fn run(args: ListArgs, project: Option<&Utf8Path>) -> Result<()> {
    let layout = resolve_layout(project)?;
    let lister = ModuleLister::new(&layout);

    let modules = lister.list().context("Failed to read project manifest")?;

    for (module, missing) in lister
        .dangling_dependencies()
        .context("Failed to read project manifest")?
    {
        output::warning(&format!(
            "'{}' depends on '{}', which is not installed",
            module, missing
        ));
    }

    if args.json {
        let json =
            serde_json::to_string_pretty(&modules).context("Failed to serialize modules to JSON")?;
        println!("{}", json);
    } else if modules.is_empty() {
        output::info("No modules installed");
    } else {
        let rows: Vec<ModuleRow> = modules.into_iter().map(ModuleRow::from).collect();
        let mut table = Table::new(rows);
        table.with(Style::sharp());
        table.with(Modify::new(Columns::new(4..5)).with(Width::wrap(40).keep_words(true))); // dependencies

        println!("{}", table);
    }

    Ok(())
}
