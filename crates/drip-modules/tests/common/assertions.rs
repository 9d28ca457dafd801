//! Assertion helpers for manifest state

#![allow(dead_code)]

use drip_core::types::ProjectManifest;

/// Assert that `name` is recorded with exactly `deps`, in order
pub fn assert_dependencies(manifest: &ProjectManifest, name: &str, deps: &[&str]) {
    let record = manifest
        .module(name)
        .unwrap_or_else(|| panic!("Module '{}' is not recorded", name));
    assert_eq!(
        record.dependencies, deps,
        "Unexpected dependencies for '{}'",
        name
    );
}

/// Assert that `name` has no record
pub fn assert_not_recorded(manifest: &ProjectManifest, name: &str) {
    assert!(
        !manifest.has_module(name),
        "Module '{}' unexpectedly recorded",
        name
    );
}

/// Assert that every recorded dependency has a record of its own
pub fn assert_consistent(manifest: &ProjectManifest) {
    let dangling = manifest.dangling_dependencies();
    assert!(dangling.is_empty(), "Dangling dependencies: {:?}", dangling);
}
