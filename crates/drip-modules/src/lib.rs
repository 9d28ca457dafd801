//! Module management for drip
//!
//! This crate handles:
//! - Loading and atomically saving the project manifest
//! - Deriving module identity from a source locator
//! - Fetching module sources (git by default, injectable for tests)
//! - Recursive dependency installation with cycle detection
//! - Module removal with reverse-reference cleanup
//! - Read-only listing of installed modules

pub mod dependency;
pub mod error;
pub mod identity;
pub mod lister;
pub mod manifest;
pub mod remover;
pub mod source;

pub use dependency::{DependencyGraphWalker, DependencyNode, InstallReport, NodeStatus};
pub use error::{FetchError, InstallError, RemoveError};
pub use identity::{module_name_from_locator, ModuleReference};
pub use lister::{ModuleLister, ModuleListing};
pub use manifest::ManifestStore;
pub use remover::{ModuleRemover, RemovalSummary};
pub use source::{GitFetcher, SourceFetcher};
