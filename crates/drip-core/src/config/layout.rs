//! Project directory layout
//!
//! A drip project is a directory containing `drip.toml`. Installed modules
//! are materialised under `.modules/<name>/`, each of which may carry its
//! own `drip.toml`.

use std::path::{Component, Path, PathBuf};
use tracing::debug;

use crate::error::Result;

/// Manifest file name, both for projects and for modules
pub const MANIFEST_FILE_NAME: &str = "drip.toml";

/// Directory (relative to the project root) holding installed modules
pub const MODULES_DIR_NAME: &str = ".modules";

/// Environment variable overriding the project directory
pub const PROJECT_DIR_ENV: &str = "DRIP_PROJECT_DIR";

/// Resolved on-disk layout of one project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
}

impl ProjectLayout {
    /// Layout rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve the project root
    ///
    /// Precedence: explicit directory, then `DRIP_PROJECT_DIR`, then the
    /// current working directory. No upward search is performed.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(dir) = explicit {
            debug!("Using project directory from command line: {:?}", dir);
            return Ok(Self::new(dir));
        }

        if let Some(dir) = std::env::var_os(PROJECT_DIR_ENV).filter(|v| !v.is_empty()) {
            debug!("Using project directory from {}: {:?}", PROJECT_DIR_ENV, dir);
            return Ok(Self::new(dir));
        }

        Ok(Self::new(std::env::current_dir()?))
    }

    /// Project root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path to the project's drip.toml
    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(MANIFEST_FILE_NAME)
    }

    /// Directory holding installed modules
    pub fn modules_dir(&self) -> PathBuf {
        self.root.join(MODULES_DIR_NAME)
    }

    /// Whether `name` can name a directory directly under `.modules/`
    ///
    /// Only a single normal path component qualifies: no separators, no
    /// `.`/`..`, no absolute or prefixed paths.
    pub fn is_module_name(name: &str) -> bool {
        let mut components = Path::new(name).components();
        matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        ) && !name.contains(['/', '\\'])
    }

    /// Install directory of one module
    ///
    /// `name` must satisfy [`ProjectLayout::is_module_name`].
    pub fn module_dir(&self, name: &str) -> PathBuf {
        self.modules_dir().join(name)
    }

    /// Path to a module's own drip.toml
    pub fn module_manifest_path(&self, name: &str) -> PathBuf {
        self.module_dir(name).join(MANIFEST_FILE_NAME)
    }
}
