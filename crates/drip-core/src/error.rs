//! Error types for drip-core

use thiserror::Error;

/// Result type alias using drip-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for drip
#[derive(Error, Debug)]
pub enum Error {
    /// No drip.toml in the project directory
    #[error("No drip project found: {path} does not exist")]
    ProjectNotFound { path: String },

    /// Manifest could not be parsed
    #[error("Failed to parse manifest {path}: {message}")]
    ManifestParse { path: String, message: String },

    /// Manifest could not be serialized
    #[error("Failed to serialize manifest: {0}")]
    ManifestSerialize(#[from] toml::ser::Error),

    /// Locator has no usable module name
    #[error("Cannot derive a module name from locator: {locator}")]
    InvalidLocator { locator: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a project not found error
    pub fn project_not_found(path: impl Into<String>) -> Self {
        Self::ProjectNotFound { path: path.into() }
    }

    /// Create a manifest parse error
    pub fn manifest_parse(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ManifestParse {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an invalid locator error
    pub fn invalid_locator(locator: impl Into<String>) -> Self {
        Self::InvalidLocator {
            locator: locator.into(),
        }
    }
}
