//! Recursive dependency installation
//!
//! Installing a module walks its dependency graph depth-first, pre-order:
//! a module is fetched and recorded before any of its own dependencies, and
//! dependencies are visited in the order its drip.toml declares them.
//!
//! Walk state is scoped to one [`DependencyGraphWalker::install`] call:
//! - the *path* from the root to the current module (each child gets its own
//!   copy), used for cycle detection;
//! - the *visited* set shared by every branch, so a module reachable through
//!   several parents (a diamond) is fetched and recorded once.
//!
//! Failure policy:
//! - a cycle aborts the whole install;
//! - a failed fetch (or unreadable drip.toml, or unusable locator) of a
//!   dependency only aborts that branch: it is logged, collected in the
//!   report, and its parent does not record it. Later edges to the same
//!   module in the same install fail as well rather than being recorded;
//! - any failure of the root module itself is returned as an error.
//!
//! Every manifest mutation is saved immediately, so modules completed before
//! a later failure stay recorded. Nothing is rolled back.

use chrono::{Local, NaiveDate};
use drip_core::types::{ModuleRecord, ProjectManifest};
use drip_core::ProjectLayout;
use std::collections::HashSet;
use tracing::{debug, info, warn};

use crate::error::InstallError;
use crate::identity::ModuleReference;
use crate::manifest::ManifestStore;
use crate::source::SourceFetcher;

/// How a module was handled during the walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeStatus {
    /// Fetched in this walk
    Fetched,
    /// Install directory already existed; fetch skipped
    AlreadyInstalled,
    /// Reached earlier in this walk through another parent
    AlreadyVisited,
}

/// One module in the walked dependency tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyNode {
    pub name: String,
    pub status: NodeStatus,
    pub children: Vec<DependencyNode>,
}

impl DependencyNode {
    fn leaf(name: String, status: NodeStatus) -> Self {
        Self {
            name,
            status,
            children: Vec::new(),
        }
    }

    /// Names in this subtree in pre-order, including repeats
    pub fn names(&self) -> Vec<&str> {
        let mut names = vec![self.name.as_str()];
        for child in &self.children {
            names.extend(child.names());
        }
        names
    }
}

/// Outcome of a successful install call
#[derive(Debug)]
pub struct InstallReport {
    /// Tree rooted at the requested module
    pub root: DependencyNode,
    /// Dependency branches that failed, in the order they failed
    pub failures: Vec<InstallError>,
}

impl InstallReport {
    /// Whether every branch installed
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// The most recent branch failure
    pub fn last_failure(&self) -> Option<&InstallError> {
        self.failures.last()
    }
}

/// State owned by a single install call
#[derive(Debug, Default)]
struct WalkContext {
    visited: HashSet<String>,
    /// Visited modules whose branch failed; later edges to them fail too
    failed: HashSet<String>,
    failures: Vec<InstallError>,
}

/// Installs modules and their transitive dependencies into a project
pub struct DependencyGraphWalker<F> {
    layout: ProjectLayout,
    store: ManifestStore,
    fetcher: F,
    install_date: Option<NaiveDate>,
}

impl<F: SourceFetcher> DependencyGraphWalker<F> {
    /// Walker for the project at `layout`, fetching with `fetcher`
    pub fn new(layout: ProjectLayout, fetcher: F) -> Self {
        let store = ManifestStore::new(layout.manifest_path());
        Self {
            layout,
            store,
            fetcher,
            install_date: None,
        }
    }

    /// Record `date` as the install date instead of today
    pub fn with_install_date(mut self, date: NaiveDate) -> Self {
        self.install_date = Some(date);
        self
    }

    /// Install `reference` and everything it depends on
    pub fn install(&self, reference: &ModuleReference) -> Result<InstallReport, InstallError> {
        let mut manifest = self.store.load()?.ok_or_else(|| {
            InstallError::project_not_found(self.store.path().display().to_string())
        })?;

        info!("Installing {}", reference);

        let mut ctx = WalkContext::default();
        let root = self.visit(reference, &[], &mut manifest, &mut ctx)?;

        Ok(InstallReport {
            root,
            failures: ctx.failures,
        })
    }

    /// Visit one module: fetch, record, then walk its declared dependencies
    fn visit(
        &self,
        reference: &ModuleReference,
        path: &[String],
        manifest: &mut ProjectManifest,
        ctx: &mut WalkContext,
    ) -> Result<DependencyNode, InstallError> {
        let name = reference
            .name()
            .map_err(|_| InstallError::InvalidLocator {
                locator: reference.locator.clone(),
            })?;

        // Cycle detection
        if path.contains(&name) {
            let err = InstallError::circular_dependency(path, &name);
            warn!("{}", err);
            return Err(err);
        }

        // Already handled through another parent
        if ctx.failed.contains(&name) {
            return Err(InstallError::previously_failed(name));
        }
        if ctx.visited.contains(&name) {
            debug!("{} already processed in this install", name);
            return Ok(DependencyNode::leaf(name, NodeStatus::AlreadyVisited));
        }

        ctx.visited.insert(name.clone());

        let mut stack = path.to_vec();
        stack.push(name.clone());

        let result = self.expand(name.clone(), reference, &stack, manifest, ctx);
        if matches!(&result, Err(e) if e.is_branch_local()) {
            ctx.failed.insert(name);
        }
        result
    }

    /// Fetch and record a newly visited module, then walk its dependencies
    fn expand(
        &self,
        name: String,
        reference: &ModuleReference,
        stack: &[String],
        manifest: &mut ProjectManifest,
        ctx: &mut WalkContext,
    ) -> Result<DependencyNode, InstallError> {
        let status = self.fetch(&name, reference)?;
        self.ensure_record(&name, reference, manifest)?;

        let mut node = DependencyNode::leaf(name, status);

        for child_ref in self.declared_dependencies(&node.name)? {
            match self.visit(&child_ref, stack, manifest, ctx) {
                Ok(child) => {
                    self.record_edge(&node.name, &child.name, manifest)?;
                    node.children.push(child);
                }
                Err(e) if e.is_branch_local() => {
                    warn!("Skipping dependency {} of {}: {}", child_ref, node.name, e);
                    ctx.failures.push(e);
                }
                Err(e) => return Err(e),
            }
        }

        Ok(node)
    }

    /// Fetch the module unless its install directory already exists
    fn fetch(&self, name: &str, reference: &ModuleReference) -> Result<NodeStatus, InstallError> {
        let module_dir = self.layout.module_dir(name);

        if module_dir.exists() {
            info!("{} is already installed, skipping fetch", name);
            return Ok(NodeStatus::AlreadyInstalled);
        }

        info!("Fetching {} from {}", name, reference);
        if let Err(e) = self.fetcher.fetch(
            &reference.locator,
            reference.version.as_deref(),
            &module_dir,
        ) {
            // A partial checkout would otherwise be mistaken for an install
            if module_dir.exists() {
                if let Err(cleanup) = std::fs::remove_dir_all(&module_dir) {
                    warn!("Failed to clean up {:?}: {}", module_dir, cleanup);
                }
            }
            return Err(InstallError::fetch_failure(name, e));
        }

        Ok(NodeStatus::Fetched)
    }

    /// Create the module's record if it has none, and persist
    fn ensure_record(
        &self,
        name: &str,
        reference: &ModuleReference,
        manifest: &mut ProjectManifest,
    ) -> Result<(), InstallError> {
        if let Some(existing) = manifest.module(name) {
            if existing.source != reference.locator {
                warn!(
                    "Module '{}' is already recorded from {}; keeping it instead of {}",
                    name, existing.source, reference.locator
                );
            }
            return Ok(());
        }

        let record = ModuleRecord::new(
            &reference.locator,
            reference.version.as_deref(),
            self.today(),
        );
        manifest.modules.insert(name.to_string(), record);
        self.store.save(manifest)?;
        info!("Recorded {} in {:?}", name, self.store.path());
        Ok(())
    }

    /// Append `child` to `parent`'s dependency list if missing, and persist
    fn record_edge(
        &self,
        parent: &str,
        child: &str,
        manifest: &mut ProjectManifest,
    ) -> Result<(), InstallError> {
        let changed = manifest
            .modules
            .get_mut(parent)
            .map(|record| record.add_dependency(child))
            .unwrap_or(false);

        if changed {
            debug!("Recorded dependency {} -> {}", parent, child);
            self.store.save(manifest)?;
        }
        Ok(())
    }

    /// Dependencies declared in an installed module's own drip.toml
    fn declared_dependencies(&self, name: &str) -> Result<Vec<ModuleReference>, InstallError> {
        let path = self.layout.module_manifest_path(name);
        let declared = ManifestStore::load_module_manifest(&path)
            .map_err(|e| InstallError::broken_module_manifest(name, e.to_string()))?;

        let Some(declared) = declared else {
            debug!("{} has no drip.toml", name);
            return Ok(Vec::new());
        };

        Ok(declared
            .fetchable()
            .filter_map(|(_, dep)| {
                dep.source
                    .as_ref()
                    .map(|source| ModuleReference::new(source, dep.version.clone()))
            })
            .collect())
    }

    fn today(&self) -> NaiveDate {
        self.install_date
            .unwrap_or_else(|| Local::now().date_naive())
    }
}
