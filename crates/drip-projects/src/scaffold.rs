//! Project scaffolding (`drip init`)
//!
//! Creates the directory skeleton of a new project:
//!
//! ```text
//! <name>/
//!   src/main.drop
//!   lib/
//!   drip.toml
//! ```

use crate::error::{Error, Result};
use camino::{Utf8Path, Utf8PathBuf};
use chrono::{Local, NaiveDate};
use drip_core::config::MANIFEST_FILE_NAME;
use drip_core::types::{ProjectKind, ProjectManifest};
use tracing::{debug, info};

/// Starter source written to `src/main.drop`
const MAIN_DROP_TEMPLATE: &str = "// Your Droplet code starts here\n";

/// Options for scaffolding a project
#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    /// Project kind recorded in drip.toml
    pub kind: ProjectKind,
    /// Creation date; defaults to today
    pub created: Option<NaiveDate>,
}

/// Files and directories created by [`init_project`]
#[derive(Debug, Clone)]
pub struct ScaffoldSummary {
    pub project_dir: Utf8PathBuf,
    pub main_file: Utf8PathBuf,
    pub lib_dir: Utf8PathBuf,
    pub manifest_path: Utf8PathBuf,
}

/// Scaffold a new project named `name` inside `parent`
pub fn init_project(parent: &Utf8Path, name: &str, options: &InitOptions) -> Result<ScaffoldSummary> {
    validate_project_name(name)?;

    let project_dir = parent.join(name);
    if project_dir.exists() {
        return Err(Error::project_exists(project_dir.as_str()));
    }

    info!("Scaffolding project '{}' at {}", name, project_dir);

    let src_dir = project_dir.join("src");
    let lib_dir = project_dir.join("lib");
    std::fs::create_dir_all(&src_dir)?;
    std::fs::create_dir_all(&lib_dir)?;

    let main_file = src_dir.join("main.drop");
    std::fs::write(&main_file, MAIN_DROP_TEMPLATE)?;
    debug!("Wrote {}", main_file);

    let created = options
        .created
        .unwrap_or_else(|| Local::now().date_naive());
    let manifest = ProjectManifest::new(name, options.kind, created);
    let manifest_path = project_dir.join(MANIFEST_FILE_NAME);
    std::fs::write(&manifest_path, toml::to_string_pretty(&manifest)?)?;
    debug!("Wrote {}", manifest_path);

    Ok(ScaffoldSummary {
        project_dir,
        main_file,
        lib_dir,
        manifest_path,
    })
}

/// Reject names that cannot be used as a single directory component
fn validate_project_name(name: &str) -> Result<()> {
    let trimmed = name.trim();
    if trimmed.is_empty()
        || trimmed != name
        || name == "."
        || name == ".."
        || name.contains(['/', '\\'])
    {
        return Err(Error::invalid_project_name(name));
    }
    Ok(())
}
