//! Implementation of `cabalize generate` and `cabalize modules`.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::core::manifest::Manifest;
use crate::core::package::Package;
use crate::ops::assemble::{assemble_package, AssembleOptions};
use crate::ops::render::{render_cabal, render_json, RenderOptions};
use crate::util::fs::{write_string, DiskFileSystem};

/// Output format for a generated package description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// A `.cabal` file.
    #[default]
    Cabal,
    /// The resolved package as JSON.
    Json,
}

/// Options for generating a package description.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Output format.
    pub format: OutputFormat,

    /// Write to this path instead of `<name>.cabal` next to the manifest.
    /// Ignored when `to_stdout` is set.
    pub output: Option<PathBuf>,

    /// Return the rendered text without writing any file.
    pub to_stdout: bool,

    pub render: RenderOptions,
    pub assemble: AssembleOptions,
}

/// Result of a generate run.
#[derive(Debug, Clone)]
pub struct GenerateResult {
    /// The resolved package.
    pub package: Package,
    /// The rendered text.
    pub contents: String,
    /// Where it was written, unless printing to stdout.
    pub written: Option<PathBuf>,
}

/// Load the manifest at `manifest_path` and resolve it against its directory.
pub fn resolve_package(manifest_path: &Path, opts: &AssembleOptions) -> Result<Package> {
    let manifest = Manifest::load(manifest_path)?;
    let fs = DiskFileSystem::new(manifest.root());
    assemble_package(&fs, &manifest, opts)
}

/// Resolve the package and render it, writing the output unless asked not to.
pub fn generate(manifest_path: &Path, opts: &GenerateOptions) -> Result<GenerateResult> {
    let package = resolve_package(manifest_path, &opts.assemble)?;

    let contents = match opts.format {
        OutputFormat::Cabal => render_cabal(&package, &opts.render),
        OutputFormat::Json => render_json(&package)?,
    };

    let written = if opts.to_stdout {
        None
    } else {
        let path = match &opts.output {
            Some(path) => path.clone(),
            None => {
                let root = manifest_path.parent().unwrap_or(Path::new("."));
                let file_name = match opts.format {
                    OutputFormat::Cabal => package.cabal_file_name(),
                    OutputFormat::Json => format!("{}.json", package.name),
                };
                root.join(file_name)
            }
        };
        write_string(&path, &contents)?;
        tracing::info!("generated {}", path.display());
        Some(path)
    };

    Ok(GenerateResult {
        package,
        contents,
        written,
    })
}
