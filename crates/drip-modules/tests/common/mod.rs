//! Common test utilities for drip-modules
//!
//! This module provides shared test infrastructure including:
//! - A fake source fetcher backed by an in-memory module catalogue
//! - Temporary project fixtures
//! - Assertion helpers for manifest state

#![allow(dead_code)]
#![allow(unused_imports)]

pub mod assertions;
pub mod fixtures;
pub mod mocks;

pub use assertions::*;
pub use fixtures::*;
pub use mocks::*;
