//! Git operations module
//!
//! Modules are fetched by cloning their repository into the project's
//! `.modules` directory. A requested version becomes a shallow clone of that
//! branch or tag; otherwise the default branch is cloned in full.

mod clone;

pub use clone::{clone_repository, is_valid_repo_locator, CloneOptions};
