//! High-level operations.
//!
//! This module contains module discovery, package assembly, rendering, and
//! the implementation of cabalize commands.

pub mod assemble;
pub mod discover;
pub mod generate;
pub mod init;
pub mod render;

pub use assemble::{assemble_package, AssembleOptions};
pub use discover::{discover_modules, resolve_module_set};
pub use generate::{generate, resolve_package, GenerateOptions, GenerateResult, OutputFormat};
pub use init::{init_project, InitOptions};
pub use render::{render_cabal, render_json, RenderOptions};
