//! Module discovery and exposed/other partitioning.

use std::collections::HashSet;
use std::path::Path;

use anyhow::Result;

use crate::core::module::{ModuleName, ModulePath, ModuleSet};
use crate::util::fs::FileSystem;

/// Discover every module under the given source directories.
///
/// Directories that do not exist contribute nothing. Results follow directory
/// order, and within one directory are sorted by module name, so `Foo` comes
/// before `Foo.Bar`. A module reachable through several directories is
/// reported once, at its first occurrence.
pub fn discover_modules<S: AsRef<str>>(
    fs: &dyn FileSystem,
    source_dirs: &[S],
) -> Result<Vec<ModuleName>> {
    let mut seen = HashSet::new();
    let mut modules = Vec::new();

    for dir in source_dirs {
        let dir = Path::new(dir.as_ref());
        if !fs.is_dir(dir) {
            tracing::debug!("skipping missing source directory `{}`", dir.display());
            continue;
        }

        let mut found = Vec::new();
        for segments in fs.walk_files(dir) {
            let segments = segments?;
            match ModulePath::from_segments(&segments) {
                Some(module) => found.push(module.name()),
                None => tracing::trace!("ignoring non-module file `{}`", segments.join("/")),
            }
        }
        found.sort();

        for name in found {
            if seen.insert(name.clone()) {
                modules.push(name);
            }
        }
    }

    Ok(modules)
}

/// Split discovered modules into exposed and other modules.
///
/// With no overrides every module is exposed. Otherwise each side is either
/// the user's list verbatim or the candidates minus the other side's user
/// list. The two sides are computed independently: when both lists are given
/// they are trusted as-is, even if they overlap or miss candidates.
pub fn resolve_module_set(
    candidates: &[ModuleName],
    exposed: Option<&[ModuleName]>,
    other: Option<&[ModuleName]>,
) -> ModuleSet {
    match (exposed, other) {
        (None, None) => ModuleSet {
            exposed_modules: candidates.to_vec(),
            other_modules: Vec::new(),
        },
        (exposed, other) => {
            if let (Some(e), Some(o)) = (exposed, other) {
                let overlap: Vec<&str> = e
                    .iter()
                    .filter(|m| o.contains(m))
                    .map(ModuleName::as_str)
                    .collect();
                if !overlap.is_empty() {
                    tracing::warn!(
                        "modules listed as both exposed and other: {}",
                        overlap.join(", ")
                    );
                }
            }

            ModuleSet {
                other_modules: match other {
                    Some(o) => o.to_vec(),
                    None => difference(candidates, exposed.unwrap_or_default()),
                },
                exposed_modules: match exposed {
                    Some(e) => e.to_vec(),
                    None => difference(candidates, other.unwrap_or_default()),
                },
            }
        }
    }
}

/// `modules` minus `remove`, preserving the order of `modules`.
pub fn difference(modules: &[ModuleName], remove: &[ModuleName]) -> Vec<ModuleName> {
    let remove: HashSet<&ModuleName> = remove.iter().collect();
    modules
        .iter()
        .filter(|m| !remove.contains(m))
        .cloned()
        .collect()
}
