//! drip.toml manifest types
//!
//! The project manifest is a table-of-tables document:
//!
//! ```toml
//! [project]
//! name = "demo"
//! created = "2026-10-18"
//! kind = "normal"
//!
//! [modules.json]
//! source = "https://github.com/droplet/json.git"
//! version = "latest"
//! installed = "2026-10-18"
//! dependencies = ["strings"]
//! ```
//!
//! Tables other than `project` and `modules` (for example `build` or
//! `scripts`) are kept in [`ProjectManifest::extra`] so that a load/save
//! cycle never drops them.

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Version recorded when a module is installed without an explicit version
pub const DEFAULT_MODULE_VERSION: &str = "latest";

fn default_module_version() -> String {
    DEFAULT_MODULE_VERSION.to_string()
}

/// Dates written either quoted (`"2026-10-18"`) or as native TOML local dates
mod manifest_date {
    use chrono::NaiveDate;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawDate {
        Text(String),
        Native(toml::value::Datetime),
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        match RawDate::deserialize(deserializer)? {
            RawDate::Text(text) => NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
                .map_err(|e| D::Error::custom(format!("invalid date '{}': {}", text, e))),
            RawDate::Native(datetime) => datetime
                .date
                .and_then(|d| NaiveDate::from_ymd_opt(d.year.into(), d.month.into(), d.day.into()))
                .ok_or_else(|| D::Error::custom(format!("expected a date, found {}", datetime))),
        }
    }
}

/// Project manifest (drip.toml at the project root)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectManifest {
    /// Project metadata
    pub project: ProjectInfo,

    /// Installed modules keyed by module name, in insertion order
    #[serde(default)]
    pub modules: IndexMap<String, ModuleRecord>,

    /// Any other top-level tables, preserved verbatim
    #[serde(flatten)]
    pub extra: toml::Table,
}

impl ProjectManifest {
    /// Create an empty manifest for a new project
    pub fn new(name: impl Into<String>, kind: ProjectKind, created: NaiveDate) -> Self {
        Self {
            project: ProjectInfo {
                name: name.into(),
                created,
                kind,
            },
            modules: IndexMap::new(),
            extra: toml::Table::new(),
        }
    }

    /// Get a module record by name
    pub fn module(&self, name: &str) -> Option<&ModuleRecord> {
        self.modules.get(name)
    }

    /// Check whether a module record exists
    pub fn has_module(&self, name: &str) -> bool {
        self.modules.contains_key(name)
    }

    /// Names of recorded dependencies that have no record of their own
    ///
    /// Returns `(module, missing dependency)` pairs in manifest order.
    pub fn dangling_dependencies(&self) -> Vec<(String, String)> {
        self.modules
            .iter()
            .flat_map(|(name, record)| {
                record
                    .dependencies
                    .iter()
                    .filter(|dep| !self.modules.contains_key(dep.as_str()))
                    .map(move |dep| (name.clone(), dep.clone()))
            })
            .collect()
    }
}

/// `[project]` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectInfo {
    /// Project name
    pub name: String,

    /// Creation date (YYYY-MM-DD)
    #[serde(deserialize_with = "manifest_date::deserialize")]
    pub created: NaiveDate,

    /// Project kind
    #[serde(default)]
    pub kind: ProjectKind,
}

/// Project kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectKind {
    #[default]
    Normal,
    PlatformVariant,
}

impl std::fmt::Display for ProjectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectKind::Normal => write!(f, "normal"),
            ProjectKind::PlatformVariant => write!(f, "platform-variant"),
        }
    }
}

/// One installed module (`[modules.<name>]`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleRecord {
    /// Fetch locator; never rewritten while the record exists
    pub source: String,

    /// Resolved version, branch or tag
    #[serde(default = "default_module_version")]
    pub version: String,

    /// Install date
    #[serde(deserialize_with = "manifest_date::deserialize")]
    pub installed: NaiveDate,

    /// Modules this module required at install time, without duplicates
    #[serde(default)]
    pub dependencies: Vec<String>,
}

impl ModuleRecord {
    /// Create a record with no dependencies
    pub fn new(source: impl Into<String>, version: Option<&str>, installed: NaiveDate) -> Self {
        Self {
            source: source.into(),
            version: version.map_or_else(default_module_version, str::to_string),
            installed,
            dependencies: Vec::new(),
        }
    }

    /// Append a dependency if it is not already listed
    ///
    /// Returns `true` when the list changed.
    pub fn add_dependency(&mut self, name: &str) -> bool {
        if self.depends_on(name) {
            return false;
        }
        self.dependencies.push(name.to_string());
        true
    }

    /// Drop a dependency from the list
    ///
    /// Returns `true` when the list changed.
    pub fn remove_dependency(&mut self, name: &str) -> bool {
        let before = self.dependencies.len();
        self.dependencies.retain(|dep| dep != name);
        self.dependencies.len() != before
    }

    /// Check whether `name` is listed as a dependency
    pub fn depends_on(&self, name: &str) -> bool {
        self.dependencies.iter().any(|dep| dep == name)
    }
}

/// Module-local manifest (drip.toml inside an installed module)
///
/// Only the `modules` table matters during dependency discovery; every
/// other table is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ModuleManifest {
    /// Declared dependencies in document order
    #[serde(default)]
    pub modules: IndexMap<String, DeclaredModule>,
}

impl ModuleManifest {
    /// Declared dependencies that carry a source locator, in document order
    pub fn fetchable(&self) -> impl Iterator<Item = (&str, &DeclaredModule)> {
        self.modules
            .iter()
            .filter(|(_, declared)| declared.source.is_some())
            .map(|(name, declared)| (name.as_str(), declared))
    }
}

/// Dependency entry declared in a module-local manifest
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DeclaredModule {
    /// Fetch locator
    #[serde(default)]
    pub source: Option<String>,

    /// Requested version, branch or tag
    #[serde(default)]
    pub version: Option<String>,
}
