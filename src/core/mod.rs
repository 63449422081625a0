//! Core data structures for cabalize.
//!
//! This module contains the foundational types:
//! - Module names and the path-to-module translation
//! - The package manifest as written by users
//! - The resolved package description
//! - Manifest lookup

pub mod manifest;
pub mod module;
pub mod package;
pub mod workspace;

pub use manifest::Manifest;
pub use module::{ModuleName, ModulePath, ModuleSet};
pub use package::Package;
pub use workspace::{find_manifest, find_manifest_upwards, MANIFEST_NAME};
