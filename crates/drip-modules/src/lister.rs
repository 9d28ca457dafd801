//! Read-only projection of installed modules

use chrono::NaiveDate;
use drip_core::{ProjectLayout, Result};
use serde::Serialize;

use crate::manifest::ManifestStore;

/// One installed module as shown by `drip list`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleListing {
    pub name: String,
    pub source: String,
    pub version: String,
    pub installed: NaiveDate,
    pub dependencies: Vec<String>,
}

/// Lists the modules recorded in a project manifest
pub struct ModuleLister {
    store: ManifestStore,
}

impl ModuleLister {
    pub fn new(layout: &ProjectLayout) -> Self {
        Self {
            store: ManifestStore::new(layout.manifest_path()),
        }
    }

    /// Modules in manifest order
    pub fn list(&self) -> Result<Vec<ModuleListing>> {
        let manifest = self.store.load_required()?;

        Ok(manifest
            .modules
            .iter()
            .map(|(name, record)| ModuleListing {
                name: name.clone(),
                source: record.source.clone(),
                version: record.version.clone(),
                installed: record.installed,
                dependencies: record.dependencies.clone(),
            })
            .collect())
    }

    /// `(module, missing dependency)` pairs with no record of their own
    pub fn dangling_dependencies(&self) -> Result<Vec<(String, String)>> {
        Ok(self.store.load_required()?.dangling_dependencies())
    }
}
