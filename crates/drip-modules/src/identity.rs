//! Module identity
//!
//! A module is identified purely by a name derived from its locator: the
//! last path segment with a trailing `.git` removed. Two different locators
//! with the same final segment (for example two forks of `json`) therefore
//! map to the same module, and whichever is installed first wins. Manifests
//! are keyed by this name, so changing the derivation would orphan existing
//! records.

use drip_core::{Error, Result};
use std::fmt;

/// Suffix stripped from the final locator segment
const VCS_SUFFIX: &str = ".git";

/// Derive the module name from a locator
///
/// # Examples
/// - `https://github.com/droplet/json.git` -> `json`
/// - `git@github.com:droplet/json.git` -> `json`
/// - `../libs/strings/` -> `strings`
pub fn module_name_from_locator(locator: &str) -> Result<String> {
    let trimmed = locator.trim().trim_end_matches(['/', '\\']);
    let segment = trimmed
        .rsplit(['/', '\\', ':'])
        .next()
        .unwrap_or(trimmed);
    let name = segment.strip_suffix(VCS_SUFFIX).unwrap_or(segment);

    if name.is_empty() || name == "." || name == ".." {
        return Err(Error::invalid_locator(locator));
    }

    Ok(name.to_string())
}

/// A request to install one module
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleReference {
    /// Fetch locator (URL or path)
    pub locator: String,
    /// Requested version, branch or tag
    pub version: Option<String>,
}

impl ModuleReference {
    /// Reference with an optional version
    pub fn new(locator: impl Into<String>, version: Option<String>) -> Self {
        Self {
            locator: locator.into(),
            version,
        }
    }

    /// Reference to the default branch
    pub fn latest(locator: impl Into<String>) -> Self {
        Self::new(locator, None)
    }

    /// Derived module name
    pub fn name(&self) -> Result<String> {
        module_name_from_locator(&self.locator)
    }
}

impl fmt::Display for ModuleReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(version) => write!(f, "{}@{}", self.locator, version),
            None => write!(f, "{}", self.locator),
        }
    }
}
