//! Project manifest persistence
//!
//! The project manifest lives at `<project>/drip.toml`. Loading a missing
//! file is not an error: it yields `None`, which callers use to tell "no
//! project here" apart from "project with no modules".
//!
//! Saves write a temp file next to the manifest and rename it into place, so
//! a reader never observes a half-written document.

use drip_core::types::{ModuleManifest, ProjectManifest};
use drip_core::{Error, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// Load/save access to one drip.toml
#[derive(Debug, Clone)]
pub struct ManifestStore {
    /// Path to manifest file
    manifest_path: PathBuf,
}

impl ManifestStore {
    /// Store backed by the manifest at `manifest_path`
    pub fn new(manifest_path: impl Into<PathBuf>) -> Self {
        Self {
            manifest_path: manifest_path.into(),
        }
    }

    /// Path to the manifest file
    pub fn path(&self) -> &Path {
        &self.manifest_path
    }

    /// Load the project manifest, or `None` when the file does not exist
    pub fn load(&self) -> Result<Option<ProjectManifest>> {
        let Some(content) = read_if_exists(&self.manifest_path)? else {
            debug!("No manifest at {:?}", self.manifest_path);
            return Ok(None);
        };

        let manifest: ProjectManifest = toml::from_str(&content)
            .map_err(|e| Error::manifest_parse(self.manifest_path.display().to_string(), e.to_string()))?;
        debug!(
            "Loaded manifest with {} modules",
            manifest.modules.len()
        );
        Ok(Some(manifest))
    }

    /// Load the project manifest, failing with `ProjectNotFound` when absent
    pub fn load_required(&self) -> Result<ProjectManifest> {
        self.load()?
            .ok_or_else(|| Error::project_not_found(self.manifest_path.display().to_string()))
    }

    /// Atomically replace the manifest file with `manifest`
    pub fn save(&self, manifest: &ProjectManifest) -> Result<()> {
        let content = toml::to_string_pretty(manifest)?;

        let parent = match self.manifest_path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };

        let mut temp_file = NamedTempFile::new_in(parent)?;
        temp_file.write_all(content.as_bytes())?;
        temp_file.as_file().sync_all()?;
        temp_file
            .persist(&self.manifest_path)
            .map_err(|e| Error::Io(e.error))?;

        debug!(
            "Saved manifest with {} modules",
            manifest.modules.len()
        );
        Ok(())
    }

    /// Load a module-local manifest, or `None` when the module has none
    pub fn load_module_manifest(path: &Path) -> Result<Option<ModuleManifest>> {
        let Some(content) = read_if_exists(path)? else {
            return Ok(None);
        };

        toml::from_str(&content)
            .map(Some)
            .map_err(|e| Error::manifest_parse(path.display().to_string(), e.to_string()))
    }
}

fn read_if_exists(path: &Path) -> Result<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(Error::Io(e)),
    }
}
