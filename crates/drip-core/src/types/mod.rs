//! Type definitions for drip manifests

mod manifest_types;

pub use manifest_types::*;
