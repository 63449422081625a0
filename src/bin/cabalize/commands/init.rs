//! `cabalize init` command

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};

use crate::cli::InitArgs;
use cabalize::ops::init::{init_project, InitOptions};
use cabalize::util::GlobalContext;

/// Determines the package name from the arguments or directory.
pub fn determine_package_name(name: &Option<String>, path: &Path) -> String {
    name.clone().unwrap_or_else(|| {
        path.file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unnamed")
            .to_string()
    })
}

/// Validates a package name.
///
/// Cabal package names are dash-separated words of letters and digits, and
/// each word must contain at least one letter.
pub fn validate_package_name(name: &str) -> Result<(), &'static str> {
    if name.is_empty() {
        return Err("package name cannot be empty");
    }

    for word in name.split('-') {
        if word.is_empty() {
            return Err("package name cannot start or end with a hyphen, or contain `--`");
        }
        if !word.chars().all(|c| c.is_alphanumeric()) {
            return Err("package name contains invalid characters");
        }
        if !word.chars().any(|c| c.is_alphabetic()) {
            return Err("each hyphen-separated part of a package name needs a letter");
        }
    }

    Ok(())
}

pub fn execute(ctx: &GlobalContext, args: InitArgs) -> Result<()> {
    let path = match args.path {
        Some(path) if path.is_absolute() => path,
        Some(path) => ctx.cwd().join(path),
        None => PathBuf::from(ctx.cwd()),
    };

    let name = determine_package_name(&args.name, &path);
    if let Err(reason) = validate_package_name(&name) {
        bail!("invalid package name `{}`: {}", name, reason);
    }

    init_project(&path, &InitOptions { name: name.clone() })?;

    eprintln!("     Initialized package `{}`", name);

    Ok(())
}
