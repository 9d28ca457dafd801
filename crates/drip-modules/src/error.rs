//! Error types for module installation and removal

use thiserror::Error;

/// Failure reported by a [`SourceFetcher`](crate::SourceFetcher)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Failed to fetch {locator}: {message}")]
pub struct FetchError {
    pub locator: String,
    pub message: String,
}

impl FetchError {
    /// Create a fetch error
    pub fn new(locator: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            locator: locator.into(),
            message: message.into(),
        }
    }
}

/// Errors raised while installing a module and its dependencies
#[derive(Error, Debug)]
pub enum InstallError {
    /// No drip.toml in the project directory
    #[error("No drip project found: {path} does not exist")]
    ProjectNotFound { path: String },

    /// Locator has no usable module name
    #[error("Cannot derive a module name from locator: {locator}")]
    InvalidLocator { locator: String },

    /// The fetch of one module failed
    #[error("Failed to fetch module '{name}' from {locator}: {message}")]
    FetchFailure {
        name: String,
        locator: String,
        message: String,
    },

    /// A module depends on itself through the current path
    #[error("Circular dependency detected: {path}")]
    CircularDependency { path: String },

    /// A fetched module carries a drip.toml that cannot be parsed
    #[error("Module '{name}' has an unreadable manifest: {message}")]
    BrokenModuleManifest { name: String, message: String },

    /// A module whose branch already failed was reached again
    #[error("Module '{name}' failed earlier in this install")]
    PreviouslyFailed { name: String },

    /// Project manifest could not be read or written
    #[error(transparent)]
    Manifest(#[from] drip_core::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl InstallError {
    /// Create a project not found error
    pub fn project_not_found(path: impl Into<String>) -> Self {
        Self::ProjectNotFound { path: path.into() }
    }

    /// Create a fetch failure error
    pub fn fetch_failure(name: impl Into<String>, source: FetchError) -> Self {
        Self::FetchFailure {
            name: name.into(),
            locator: source.locator,
            message: source.message,
        }
    }

    /// Create a circular dependency error from the offending path
    ///
    /// `stack` is the root-to-current path and `repeated` the name found on it.
    pub fn circular_dependency(stack: &[String], repeated: &str) -> Self {
        let mut path: Vec<&str> = stack.iter().map(String::as_str).collect();
        path.push(repeated);
        Self::CircularDependency {
            path: path.join(" -> "),
        }
    }

    /// Create a broken module manifest error
    pub fn broken_module_manifest(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::BrokenModuleManifest {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create a previously failed error
    pub fn previously_failed(name: impl Into<String>) -> Self {
        Self::PreviouslyFailed { name: name.into() }
    }

    /// Whether the failure only aborts the branch that produced it
    ///
    /// Branch-local failures of a dependency are logged and the walk moves on
    /// to its siblings. Everything else aborts the whole install.
    pub fn is_branch_local(&self) -> bool {
        matches!(
            self,
            Self::InvalidLocator { .. }
                | Self::FetchFailure { .. }
                | Self::BrokenModuleManifest { .. }
                | Self::PreviouslyFailed { .. }
        )
    }
}

/// Errors raised while removing a module
#[derive(Error, Debug)]
pub enum RemoveError {
    /// No drip.toml in the project directory
    #[error("No drip project found: {path} does not exist")]
    ProjectNotFound { path: String },

    /// No install directory for the module
    #[error("Module '{name}' is not installed")]
    NotInstalled { name: String },

    /// Name is not a single directory name under .modules
    #[error("Invalid module name: '{name}'")]
    InvalidModuleName { name: String },

    /// Project manifest could not be read or written
    #[error(transparent)]
    Manifest(#[from] drip_core::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RemoveError {
    /// Create a project not found error
    pub fn project_not_found(path: impl Into<String>) -> Self {
        Self::ProjectNotFound { path: path.into() }
    }

    /// Create a not installed error
    pub fn not_installed(name: impl Into<String>) -> Self {
        Self::NotInstalled { name: name.into() }
    }

    /// Create an invalid module name error
    pub fn invalid_module_name(name: impl Into<String>) -> Self {
        Self::InvalidModuleName { name: name.into() }
    }
}
