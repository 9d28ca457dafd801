//! Project init command

use anyhow::{anyhow, Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use drip_projects::scaffold::{init_project, InitOptions};

use super::resolve_layout;
use crate::cli::InitArgs;
use crate::output;

/// Scaffold a new project in the working directory
///
/// `drip init hello` creates `hello/src/main.drop`, `hello/lib/` and
/// `hello/drip.toml`.
pub fn run(args: InitArgs, project: Option<&Utf8Path>) -> Result<()> {
    let layout = resolve_layout(project)?;
    let parent = Utf8PathBuf::from_path_buf(layout.root().to_path_buf())
        .map_err(|p| anyhow!("Directory is not valid UTF-8: {:?}", p))?;

    let options = InitOptions {
        kind: args.kind.into(),
        created: None,
    };
    let summary = init_project(&parent, &args.name, &options)
        .with_context(|| format!("Failed to create project '{}'", args.name))?;

    output::success(&format!("Created {} project '{}'", options.kind, args.name));
    output::header("Project structure");
    output::kv("Project", summary.project_dir.as_str());
    output::kv("Entry point", summary.main_file.as_str());
    output::kv("Libraries", summary.lib_dir.as_str());
    output::kv("Manifest", summary.manifest_path.as_str());
    output::info(&format!(
        "Next: cd {} && drip install <locator>",
        args.name
    ));

    Ok(())
}
