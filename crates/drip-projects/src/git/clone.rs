//! Repository cloning

use crate::error::{Error, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::io::ErrorKind;
use std::process::Command;
use tracing::{debug, info};

/// Options for cloning a repository
#[derive(Debug, Clone, Default)]
pub struct CloneOptions {
    /// Shallow clone with specified depth
    pub depth: Option<u32>,
    /// Branch or tag to checkout
    pub branch: Option<String>,
}

impl CloneOptions {
    /// Shallow clone of `version` when given, full default-branch clone otherwise
    pub fn for_version(version: Option<&str>) -> Self {
        match version {
            Some(v) => Self {
                depth: Some(1),
                branch: Some(v.to_string()),
            },
            None => Self::default(),
        }
    }
}

/// Clone a repository
///
/// # Arguments
/// * `url` - Repository URL or local repository path
/// * `destination` - Destination directory path
/// * `options` - Clone options
///
/// # Errors
/// Returns error if:
/// - The locator is not a recognised repository address
/// - Destination already exists
/// - git is missing or exits non-zero
pub fn clone_repository(
    url: &str,
    destination: &Utf8Path,
    options: &CloneOptions,
) -> Result<Utf8PathBuf> {
    info!("Cloning repository: {} -> {}", url, destination);

    if !is_valid_repo_locator(url) {
        return Err(Error::invalid_repo_url(url));
    }

    if destination.exists() {
        return Err(Error::repo_exists(destination.as_str()));
    }

    if let Some(parent) = destination.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut cmd = Command::new("git");
    cmd.arg("clone").arg("--quiet");

    if let Some(depth) = options.depth {
        cmd.arg("--depth").arg(depth.to_string());
    }

    if let Some(branch) = &options.branch {
        cmd.arg("--branch").arg(branch);
    }

    cmd.arg(url).arg(destination.as_str());

    debug!("Running: git clone {:?}", options);
    let output = cmd.output().map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::GitNotFound,
        _ => Error::Io(e),
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::clone_failed(stderr.trim()));
    }

    info!("Repository cloned successfully");
    Ok(destination.to_path_buf())
}

/// Check whether a string looks like something git can clone
///
/// Remote URLs and scp-style addresses are accepted as-is; anything else
/// must be an existing local directory.
pub fn is_valid_repo_locator(url: &str) -> bool {
    const REMOTE_PREFIXES: &[&str] = &["https://", "http://", "ssh://", "git://", "file://", "git@"];

    if url.is_empty() {
        return false;
    }

    REMOTE_PREFIXES.iter().any(|p| url.starts_with(p)) || Utf8Path::new(url).is_dir()
}
