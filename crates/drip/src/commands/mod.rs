//! CLI command implementations

pub mod init;
pub mod install;
pub mod list;
pub mod remove;

use anyhow::{Context, Result};
use camino::Utf8Path;
use drip_core::ProjectLayout;
use tracing::debug;

/// Resolve the project root from `--project`, `DRIP_PROJECT_DIR` or the cwd
fn resolve_layout(project: Option<&Utf8Path>) -> Result<ProjectLayout> {
    let layout = ProjectLayout::resolve(project.map(Utf8Path::as_std_path))
        .context("Failed to determine project directory")?;
    debug!("Project root: {:?}", layout.root());
    Ok(layout)
}
