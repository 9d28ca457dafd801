//! # drip-projects
//!
//! Project-level collaborators for the drip CLI:
//! - Project scaffolding (`drip init`)
//! - Git cloning used to materialise remote modules
//!
//! # Examples
//!
//! ## Scaffold a new project
//!
//! ```no_run
//! use camino::Utf8Path;
//! use drip_core::types::ProjectKind;
//! use drip_projects::scaffold::{init_project, InitOptions};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let options = InitOptions {
//!     kind: ProjectKind::Normal,
//!     ..Default::default()
//! };
//! init_project(Utf8Path::new("/tmp"), "hello", &options)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Shallow-clone one tag
//!
//! ```no_run
//! use camino::Utf8Path;
//! use drip_projects::git::{clone_repository, CloneOptions};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let options = CloneOptions {
//!     depth: Some(1),
//!     branch: Some("v1.0".to_string()),
//! };
//! clone_repository(
//!     "https://github.com/droplet/json.git",
//!     Utf8Path::new("/tmp/hello/.modules/json"),
//!     &options,
//! )?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod git;
pub mod scaffold;

pub use error::{Error, Result};
