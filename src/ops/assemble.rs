//! Turn a parsed manifest into a resolved [`Package`].
//!
//! Each target's settings are the package-wide settings followed by the
//! target's own. Module lists come from discovery over the merged source
//! directories unless the manifest spells them out.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use rayon::prelude::*;

use crate::core::manifest::{
    CommonSettings, ExecutableSection, LibrarySection, Manifest, StringList,
};
use crate::core::module::{ModuleName, ModulePath};
use crate::core::package::{
    BuildSettings, Executable, Library, Package, DEFAULT_VERSION, LICENSE_FILE,
};
use crate::ops::discover::{discover_modules, resolve_module_set};
use crate::util::fs::{path_segments, FileSystem};

/// Options for package assembly.
#[derive(Debug, Clone)]
pub struct AssembleOptions {
    /// Assemble executables and tests on the rayon thread pool.
    pub parallel: bool,
}

impl Default for AssembleOptions {
    fn default() -> Self {
        AssembleOptions { parallel: true }
    }
}

/// Merge package-wide settings with a target's settings.
pub fn merge_settings(package: &CommonSettings, target: &CommonSettings) -> BuildSettings {
    BuildSettings {
        source_dirs: concat(&package.source_dirs, &target.source_dirs),
        dependencies: [&package.dependencies, &target.dependencies]
            .into_iter()
            .filter(|group| !group.is_empty())
            .cloned()
            .collect(),
        ghc_options: concat(&package.ghc_options, &target.ghc_options),
        default_extensions: concat(&package.default_extensions, &target.default_extensions),
    }
}

fn concat(first: &[String], second: &[String]) -> Vec<String> {
    first.iter().chain(second).cloned().collect()
}

fn module_names(list: &Option<StringList>) -> Option<Vec<ModuleName>> {
    list.as_ref()
        .map(|l| l.to_vec().into_iter().map(ModuleName::from).collect())
}

/// Build the library target.
pub fn assemble_library(
    fs: &dyn FileSystem,
    package: &CommonSettings,
    section: &LibrarySection,
) -> Result<Library> {
    let settings = merge_settings(package, &section.settings());
    let candidates = discover_modules(fs, &settings.source_dirs)
        .context("failed to discover modules for the library")?;
    tracing::debug!("library: discovered {} modules", candidates.len());

    let exposed = module_names(&section.exposed_modules);
    let other = module_names(&section.other_modules);
    let modules = resolve_module_set(&candidates, exposed.as_deref(), other.as_deref());

    Ok(Library { settings, modules })
}

/// Build an executable or test suite target.
pub fn assemble_executable(
    fs: &dyn FileSystem,
    package: &CommonSettings,
    name: &str,
    section: &ExecutableSection,
) -> Result<Executable> {
    let settings = merge_settings(package, &section.settings());

    let other_modules = match module_names(&section.other_modules) {
        Some(explicit) => explicit,
        None => {
            let discovered = discover_modules(fs, &settings.source_dirs)
                .with_context(|| format!("failed to discover modules for `{}`", name))?;
            match main_module(&section.main, &settings.source_dirs) {
                Some(main) => discovered.into_iter().filter(|m| *m != main).collect(),
                None => discovered,
            }
        }
    };
    tracing::debug!("{}: {} other modules", name, other_modules.len());

    Ok(Executable {
        name: name.to_string(),
        main: section.main.clone(),
        settings,
        other_modules,
    })
}

/// The module name of an executable's main file.
///
/// A main path that starts with one of the source directories is taken
/// relative to the first such directory. Both sides are compared by
/// component with `.` segments dropped.
pub fn main_module(main: &str, source_dirs: &[String]) -> Option<ModuleName> {
    let main = path_segments(Path::new(main))?;
    let relative = source_dirs
        .iter()
        .filter_map(|dir| path_segments(Path::new(dir)))
        .filter(|dir| !dir.is_empty())
        .find_map(|dir| main.strip_prefix(dir.as_slice()))
        .unwrap_or(main.as_slice());
    ModulePath::from_segments(relative).map(|m| m.name())
}

fn assemble_group(
    fs: &dyn FileSystem,
    package: &CommonSettings,
    sections: &BTreeMap<String, ExecutableSection>,
    parallel: bool,
) -> Result<Vec<Executable>> {
    if parallel {
        sections
            .par_iter()
            .map(|(name, section)| assemble_executable(fs, package, name, section))
            .collect()
    } else {
        sections
            .iter()
            .map(|(name, section)| assemble_executable(fs, package, name, section))
            .collect()
    }
}

/// Assemble the whole package.
pub fn assemble_package(
    fs: &dyn FileSystem,
    manifest: &Manifest,
    opts: &AssembleOptions,
) -> Result<Package> {
    let name = match &manifest.name {
        Some(name) => name.clone(),
        None => fs
            .root_name()
            .context("package has no name and the directory name is unavailable")?,
    };

    let package_settings = manifest.settings();

    let library = manifest
        .library
        .as_ref()
        .map(|section| assemble_library(fs, &package_settings, section))
        .transpose()?;
    let executables = assemble_group(fs, &package_settings, &manifest.executables, opts.parallel)?;
    let tests = assemble_group(fs, &package_settings, &manifest.tests, opts.parallel)?;

    let license_file = fs
        .is_file(Path::new(LICENSE_FILE))
        .then(|| LICENSE_FILE.to_string());

    let source_repository = manifest
        .github
        .as_ref()
        .map(|repo| format!("https://github.com/{}", repo));
    let homepage = derived_url(
        manifest.homepage.as_deref(),
        source_repository.as_deref(),
        "#readme",
    );
    let bug_reports = derived_url(
        manifest.bug_reports.as_deref(),
        source_repository.as_deref(),
        "/issues",
    );

    tracing::debug!(
        "assembled `{}`: library: {}, {} executables, {} tests",
        name,
        library.is_some(),
        executables.len(),
        tests.len()
    );

    Ok(Package {
        name,
        version: manifest
            .version
            .clone()
            .unwrap_or_else(|| DEFAULT_VERSION.to_string()),
        synopsis: manifest.synopsis.clone(),
        description: manifest.description.clone(),
        category: manifest.category.clone(),
        author: manifest.author.clone(),
        maintainer: manifest.maintainer.clone(),
        copyright: manifest.copyright.clone(),
        license: manifest.license.clone(),
        license_file,
        homepage,
        bug_reports,
        source_repository,
        library,
        executables,
        tests,
    })
}

/// An explicit value wins; an explicit empty string suppresses the field;
/// otherwise the value is derived from the repository URL.
fn derived_url(explicit: Option<&str>, repository: Option<&str>, suffix: &str) -> Option<String> {
    match explicit {
        Some("") => None,
        Some(url) => Some(url.to_string()),
        None => repository.map(|repo| format!("{}{}", repo, suffix)),
    }
}
