//! Module source fetching
//!
//! The installer never shells out directly; it goes through
//! [`SourceFetcher`], which tests replace with an in-memory fake.

use camino::Utf8Path;
use drip_projects::git::{clone_repository, CloneOptions};
use std::path::Path;
use tracing::debug;

use crate::error::FetchError;

/// Materialises a module's files into a directory
#[cfg_attr(test, mockall::automock)]
pub trait SourceFetcher {
    /// Fetch `locator` at `version` (default branch when `None`) into `destination`
    ///
    /// `destination` does not exist when this is called. On failure nothing
    /// is expected to remain at `destination`.
    fn fetch<'a>(&self, locator: &str, version: Option<&'a str>, destination: &Path)
        -> Result<(), FetchError>;
}

impl<T: SourceFetcher + ?Sized> SourceFetcher for &T {
    fn fetch(
        &self,
        locator: &str,
        version: Option<&str>,
        destination: &Path,
    ) -> Result<(), FetchError> {
        (**self).fetch(locator, version, destination)
    }
}

/// Fetches modules with `git clone`
///
/// A requested version is cloned shallowly (`--depth 1 --branch <version>`);
/// otherwise the default branch is cloned in full.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitFetcher;

impl GitFetcher {
    pub fn new() -> Self {
        Self
    }
}

impl SourceFetcher for GitFetcher {
    fn fetch(
        &self,
        locator: &str,
        version: Option<&str>,
        destination: &Path,
    ) -> Result<(), FetchError> {
        let destination = Utf8Path::from_path(destination).ok_or_else(|| {
            FetchError::new(
                locator,
                format!("destination is not valid UTF-8: {:?}", destination),
            )
        })?;

        let options = CloneOptions::for_version(version);
        debug!("Fetching {} ({:?}) into {}", locator, version, destination);

        clone_repository(locator, destination, &options)
            .map(|_| ())
            .map_err(|e| FetchError::new(locator, e.to_string()))
    }
}
