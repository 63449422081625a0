//! Command implementations

pub mod completions;
pub mod generate;
pub mod init;
pub mod modules;

use std::path::PathBuf;

use anyhow::Result;
use cabalize::GlobalContext;

/// The manifest named on the command line, or the nearest one above cwd.
pub fn manifest_path(ctx: &GlobalContext, explicit: Option<PathBuf>) -> Result<PathBuf> {
    match explicit {
        Some(path) if path.is_absolute() => Ok(path),
        Some(path) => Ok(ctx.cwd().join(path)),
        None => Ok(ctx.find_manifest()?),
    }
}
