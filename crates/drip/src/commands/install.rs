//! Module install command

use anyhow::{anyhow, Context, Result};
use camino::Utf8Path;
use drip_modules::{DependencyGraphWalker, DependencyNode, GitFetcher, ModuleReference, NodeStatus};

use super::resolve_layout;
use crate::cli::InstallArgs;
use crate::output;

/// Install a module and its transitive dependencies
///
/// Supports:
/// - Default branch: `drip install https://github.com/droplet/json.git`
/// - Pinned ref: `drip install https://github.com/droplet/json.git --version v2`
///
/// Exits non-zero when any dependency branch failed, even though the
/// modules that did install stay recorded.
pub fn run(args: InstallArgs, project: Option<&Utf8Path>) -> Result<()> {
    let layout = resolve_layout(project)?;
    let reference = ModuleReference::new(args.locator, args.version);

    output::info(&format!("Installing {}", reference));

    let walker = DependencyGraphWalker::new(layout, GitFetcher::new());
    let report = walker
        .install(&reference)
        .with_context(|| format!("Failed to install {}", reference))?;

    output::header("Dependency tree");
    output::tree(&render_tree(&report.root));

    if let Some(last) = report.last_failure() {
        for failure in &report.failures {
            output::error(&failure.to_string());
        }
        return Err(anyhow!(
            "{} installed with {} failed dependency branch(es); last failure: {}",
            report.root.name,
            report.failures.len(),
            last
        ));
    }

    output::success(&format!("Installed {}", report.root.name));
    Ok(())
}

fn status_label(status: NodeStatus) -> &'static str {
    match status {
        NodeStatus::Fetched => "fetched",
        NodeStatus::AlreadyInstalled => "already installed",
        NodeStatus::AlreadyVisited => "see above",
    }
}

/// Render the dependency tree with box-drawing connectors
fn render_tree(root: &DependencyNode) -> Vec<String> {
    let mut lines = vec![format!("{} ({})", root.name, status_label(root.status))];
    render_children(&root.children, "", &mut lines);
    lines
}

fn render_children(children: &[DependencyNode], prefix: &str, lines: &mut Vec<String>) {
    for (i, child) in children.iter().enumerate() {
        let last = i + 1 == children.len();
        let (branch, indent) = if last {
            ("└── ", "    ")
        } else {
            ("├── ", "│   ")
        };
        lines.push(format!(
            "{}{}{} ({})",
            prefix,
            branch,
            child.name,
            status_label(child.status)
        ));
        render_children(&child.children, &format!("{}{}", prefix, indent), lines);
    }
}
