//! cabalize - generate Cabal package descriptions from a concise manifest
//!
//! This crate provides the core library functionality for cabalize,
//! including module discovery, package assembly, and `.cabal` rendering.

pub mod core;
pub mod ops;
pub mod util;

/// Test utilities and mocks for cabalize unit tests.
///
/// This module is only available when compiling with `--cfg test` or
/// running tests. It provides an in-memory filesystem and on-disk
/// project fixtures.
#[cfg(test)]
pub mod test_support;

pub use core::{
    manifest::Manifest,
    module::{ModuleName, ModuleSet},
    package::Package,
};

pub use util::context::GlobalContext;
