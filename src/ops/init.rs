//! Implementation of `cabalize init`.

use std::path::Path;

use anyhow::{bail, Result};

use crate::core::manifest::generate_default_manifest;
use crate::core::workspace::MANIFEST_NAME;
use crate::util::fs::{ensure_dir, write_string};

/// Options for initializing a package.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Package name
    pub name: String,
}

const LIB_SOURCE: &str = r#"module Lib (someFunc) where

someFunc :: IO ()
someFunc = putStrLn "someFunc"
"#;

const MAIN_SOURCE: &str = r#"module Main (main) where

import Lib

main :: IO ()
main = someFunc
"#;

/// Write a starter `package.toml` into `path`, creating the directory if needed.
///
/// Source files are only written where none exist yet.
pub fn init_project(path: &Path, opts: &InitOptions) -> Result<()> {
    ensure_dir(path)?;

    let manifest_path = path.join(MANIFEST_NAME);
    if manifest_path.exists() {
        bail!("`{}` already exists in `{}`", MANIFEST_NAME, path.display());
    }

    write_string(&manifest_path, &generate_default_manifest(&opts.name))?;

    let lib = path.join("src").join("Lib.hs");
    if !lib.exists() {
        write_string(&lib, LIB_SOURCE)?;
    }

    let main = path.join("app").join("Main.hs");
    if !main.exists() {
        write_string(&main, MAIN_SOURCE)?;
    }

    tracing::debug!("initialized package `{}` in {}", opts.name, path.display());
    Ok(())
}
