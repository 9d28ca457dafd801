//! # drip-core
//!
//! Core library for the drip module manager providing:
//! - The `drip.toml` data model (project info and module records)
//! - Project layout resolution (manifest path, `.modules` directory)
//! - Shared error types

pub mod config;
pub mod error;
pub mod types;

pub use config::ProjectLayout;
pub use error::{Error, Result};
