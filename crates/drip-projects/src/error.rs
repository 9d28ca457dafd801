//! Error types for drip-projects

use thiserror::Error;

/// Result type alias using drip-projects's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Project management error types
#[derive(Error, Debug)]
pub enum Error {
    /// Project already exists
    #[error("Directory '{path}' already exists")]
    ProjectExists { path: String },

    /// Invalid project name
    #[error("Invalid project name: '{name}'. Must be non-empty and contain no path separators")]
    InvalidProjectName { name: String },

    /// Git command not found
    #[error("Git command not found. Please ensure git is installed and in PATH")]
    GitNotFound,

    /// Invalid repository locator
    #[error("Invalid repository URL: {url}")]
    InvalidRepoUrl { url: String },

    /// Clone destination already exists
    #[error("Repository already exists at: {path}")]
    RepoExists { path: String },

    /// Clone failed
    #[error("Failed to clone repository: {message}")]
    CloneFailed { message: String },

    /// Manifest serialization error
    #[error("Failed to write manifest: {0}")]
    Manifest(#[from] toml::ser::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a project exists error
    pub fn project_exists(path: impl Into<String>) -> Self {
        Self::ProjectExists { path: path.into() }
    }

    /// Create an invalid project name error
    pub fn invalid_project_name(name: impl Into<String>) -> Self {
        Self::InvalidProjectName { name: name.into() }
    }

    /// Create an invalid repo URL error
    pub fn invalid_repo_url(url: impl Into<String>) -> Self {
        Self::InvalidRepoUrl { url: url.into() }
    }

    /// Create a repo exists error
    pub fn repo_exists(path: impl Into<String>) -> Self {
        Self::RepoExists { path: path.into() }
    }

    /// Create a clone failed error
    pub fn clone_failed(message: impl Into<String>) -> Self {
        Self::CloneFailed {
            message: message.into(),
        }
    }
}
