//! Module removal
//!
//! Removing a module deletes its install directory and its record, then
//! strips its name from every other record's dependency list. Modules that
//! depend on it, or that only it depended on, are left in place.

use drip_core::ProjectLayout;
use tracing::{debug, info};

use crate::error::RemoveError;
use crate::manifest::ManifestStore;

/// What a removal changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovalSummary {
    /// Removed module
    pub name: String,
    /// Whether a manifest record existed and was deleted
    pub record_removed: bool,
    /// Modules whose dependency list no longer mentions the removed module
    pub scrubbed_from: Vec<String>,
}

/// Removes installed modules from a project
pub struct ModuleRemover {
    layout: ProjectLayout,
    store: ManifestStore,
}

impl ModuleRemover {
    /// Remover for the project at `layout`
    pub fn new(layout: ProjectLayout) -> Self {
        let store = ManifestStore::new(layout.manifest_path());
        Self { layout, store }
    }

    /// Remove the module `name`
    ///
    /// Fails with `InvalidModuleName` for anything that is not a plain
    /// directory name, and with `NotInstalled` when its install directory
    /// does not exist, even if a stale record is still present.
    pub fn remove(&self, name: &str) -> Result<RemovalSummary, RemoveError> {
        if !ProjectLayout::is_module_name(name) {
            return Err(RemoveError::invalid_module_name(name));
        }

        let mut manifest = self.store.load()?.ok_or_else(|| {
            RemoveError::project_not_found(self.store.path().display().to_string())
        })?;

        let module_dir = self.layout.module_dir(name);
        if !module_dir.is_dir() {
            return Err(RemoveError::not_installed(name));
        }

        info!("Removing {} from {:?}", name, module_dir);
        std::fs::remove_dir_all(&module_dir)?;

        let record_removed = manifest.modules.shift_remove(name).is_some();
        if !record_removed {
            debug!("{} had no manifest record", name);
        }

        let scrubbed_from: Vec<String> = manifest
            .modules
            .iter_mut()
            .filter_map(|(other, record)| record.remove_dependency(name).then(|| other.clone()))
            .collect();
        for other in &scrubbed_from {
            debug!("Dropped {} from the dependencies of {}", name, other);
        }

        self.store.save(&manifest)?;

        Ok(RemovalSummary {
            name: name.to_string(),
            record_removed,
            scrubbed_from,
        })
    }
}
