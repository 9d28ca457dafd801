//! Fake source fetcher
//!
//! Serves modules from an in-memory catalogue instead of cloning, and records
//! every fetch so tests can count them.

#![allow(dead_code)]

use drip_modules::{FetchError, SourceFetcher};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Locator used for a catalogue module called `name`
pub fn locator(name: &str) -> String {
    format!("https://git.example/droplet/{}.git", name)
}

/// One module the fake can serve
#[derive(Clone, Debug)]
enum CatalogueEntry {
    Module { manifest: Option<String> },
    Failing { message: String },
}

/// Record of a fetch call
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchCall {
    pub locator: String,
    pub version: Option<String>,
    pub destination: PathBuf,
}

/// In-memory [`SourceFetcher`]
#[derive(Default)]
pub struct FakeFetcher {
    catalogue: HashMap<String, CatalogueEntry>,
    calls: RefCell<Vec<FetchCall>>,
}

impl FakeFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `name` with a drip.toml declaring `deps` (by catalogue locator)
    pub fn module(mut self, name: &str, deps: &[&str]) -> Self {
        let manifest = if deps.is_empty() {
            None
        } else {
            Some(module_manifest(deps))
        };
        self.catalogue
            .insert(locator(name), CatalogueEntry::Module { manifest });
        self
    }

    /// Serve `name` with a hand-written drip.toml
    pub fn module_with_manifest(mut self, name: &str, manifest: &str) -> Self {
        self.catalogue.insert(
            locator(name),
            CatalogueEntry::Module {
                manifest: Some(manifest.to_string()),
            },
        );
        self
    }

    /// Make every fetch of `name` fail
    pub fn failing(mut self, name: &str) -> Self {
        self.catalogue.insert(
            locator(name),
            CatalogueEntry::Failing {
                message: "fatal: repository not found".to_string(),
            },
        );
        self
    }

    /// All recorded fetch calls
    pub fn calls(&self) -> Vec<FetchCall> {
        self.calls.borrow().clone()
    }

    /// Number of fetches of catalogue module `name`
    pub fn fetch_count(&self, name: &str) -> usize {
        let target = locator(name);
        self.calls
            .borrow()
            .iter()
            .filter(|call| call.locator == target)
            .count()
    }

    /// Total number of fetches
    pub fn total_fetches(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl SourceFetcher for FakeFetcher {
    fn fetch(
        &self,
        locator: &str,
        version: Option<&str>,
        destination: &Path,
    ) -> Result<(), FetchError> {
        self.calls.borrow_mut().push(FetchCall {
            locator: locator.to_string(),
            version: version.map(str::to_string),
            destination: destination.to_path_buf(),
        });

        match self.catalogue.get(locator) {
            Some(CatalogueEntry::Module { manifest }) => {
                std::fs::create_dir_all(destination)
                    .map_err(|e| FetchError::new(locator, e.to_string()))?;
                std::fs::write(destination.join("main.drop"), "// module\n")
                    .map_err(|e| FetchError::new(locator, e.to_string()))?;
                if let Some(content) = manifest {
                    std::fs::write(destination.join("drip.toml"), content)
                        .map_err(|e| FetchError::new(locator, e.to_string()))?;
                }
                Ok(())
            }
            Some(CatalogueEntry::Failing { message }) => Err(FetchError::new(locator, message)),
            None => Err(FetchError::new(locator, "fatal: repository not found")),
        }
    }
}

/// Module-local drip.toml declaring `deps` in order
pub fn module_manifest(deps: &[&str]) -> String {
    let mut content = String::from("[project]\nname = \"dep\"\ncreated = \"2025-01-01\"\n");
    for dep in deps {
        content.push_str(&format!(
            "\n[modules.{}]\nsource = \"{}\"\n",
            dep,
            locator(dep)
        ));
    }
    content
}
