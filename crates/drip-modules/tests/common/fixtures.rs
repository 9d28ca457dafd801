//! Temporary project fixtures

#![allow(dead_code)]

use chrono::NaiveDate;
use drip_core::types::{ProjectKind, ProjectManifest};
use drip_core::ProjectLayout;
use drip_modules::{DependencyGraphWalker, ManifestStore, ModuleRemover, SourceFetcher};
use tempfile::TempDir;

/// Install date stamped by fixture walkers
pub fn install_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
}

/// A scaffolded project in a temporary directory
pub struct TestProject {
    temp_dir: TempDir,
    layout: ProjectLayout,
}

impl TestProject {
    /// Project with an empty drip.toml
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let layout = ProjectLayout::new(temp_dir.path());
        let manifest = ProjectManifest::new("demo", ProjectKind::Normal, install_date());
        ManifestStore::new(layout.manifest_path())
            .save(&manifest)
            .expect("Failed to write project manifest");
        Self { temp_dir, layout }
    }

    /// Directory without a drip.toml
    pub fn without_manifest() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let layout = ProjectLayout::new(temp_dir.path());
        Self { temp_dir, layout }
    }

    pub fn layout(&self) -> &ProjectLayout {
        &self.layout
    }

    pub fn store(&self) -> ManifestStore {
        ManifestStore::new(self.layout.manifest_path())
    }

    /// Current manifest on disk
    pub fn manifest(&self) -> ProjectManifest {
        self.store()
            .load_required()
            .expect("Failed to load project manifest")
    }

    /// Raw drip.toml text
    pub fn manifest_text(&self) -> String {
        std::fs::read_to_string(self.layout.manifest_path()).expect("Failed to read drip.toml")
    }

    pub fn walker<F: SourceFetcher>(&self, fetcher: F) -> DependencyGraphWalker<F> {
        DependencyGraphWalker::new(self.layout.clone(), fetcher).with_install_date(install_date())
    }

    pub fn remover(&self) -> ModuleRemover {
        ModuleRemover::new(self.layout.clone())
    }

    /// Whether the module's install directory exists
    pub fn is_on_disk(&self, name: &str) -> bool {
        self.layout.module_dir(name).is_dir()
    }
}
