//! The resolved package model.
//!
//! A [`Package`] is produced once from a manifest by
//! [`assemble_package`](crate::ops::assemble::assemble_package) and is fully
//! materialized: every module list has been discovered and every setting
//! merged. Renderers consume it as-is.

use serde::Serialize;

use crate::core::module::{ModuleName, ModuleSet};

/// The file name a license file must have to be picked up.
pub const LICENSE_FILE: &str = "LICENSE";

/// Version used when the manifest declares none.
pub const DEFAULT_VERSION: &str = "0.0.0";

/// Target settings after merging in the package-wide defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct BuildSettings {
    /// Package source dirs followed by target source dirs.
    pub source_dirs: Vec<String>,

    /// Dependency groups in provenance order: package-level, then
    /// target-level. Groups with no entries are omitted.
    pub dependencies: Vec<Vec<String>>,

    /// Package options followed by target options.
    pub ghc_options: Vec<String>,

    /// Package extensions followed by target extensions.
    pub default_extensions: Vec<String>,
}

/// The package library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Library {
    #[serde(flatten)]
    pub settings: BuildSettings,

    #[serde(flatten)]
    pub modules: ModuleSet,
}

/// An executable or test suite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Executable {
    /// Target name, unique within its group.
    pub name: String,

    /// File holding `main`, as declared.
    pub main: String,

    #[serde(flatten)]
    pub settings: BuildSettings,

    /// Modules compiled in besides the entry point.
    pub other_modules: Vec<ModuleName>,
}

/// A fully resolved package.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Package {
    pub name: String,
    pub version: String,
    pub synopsis: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub author: Option<String>,
    pub maintainer: Option<String>,
    pub copyright: Option<String>,
    pub license: Option<String>,

    /// Set only when a `LICENSE` file exists at the package root.
    pub license_file: Option<String>,

    pub homepage: Option<String>,
    pub bug_reports: Option<String>,

    /// Repository URL, derived from the `github` shorthand.
    pub source_repository: Option<String>,

    pub library: Option<Library>,
    pub executables: Vec<Executable>,
    pub tests: Vec<Executable>,
}

impl Package {
    /// File name of the generated Cabal file.
    pub fn cabal_file_name(&self) -> String {
        format!("{}.cabal", self.name)
    }
}

impl std::fmt::Display for Package {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} v{}", self.name, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_package() -> Package {
        Package {
            name: "foo".to_string(),
            version: DEFAULT_VERSION.to_string(),
            synopsis: None,
            description: None,
            category: None,
            author: None,
            maintainer: None,
            copyright: None,
            license: None,
            license_file: None,
            homepage: None,
            bug_reports: None,
            source_repository: None,
            library: None,
            executables: vec![],
            tests: vec![],
        }
    }

    #[test]
    fn test_package_display_and_file_name() {
        let pkg = empty_package();
        assert_eq!(pkg.to_string(), "foo v0.0.0");
        assert_eq!(pkg.cabal_file_name(), "foo.cabal");
    }

    #[test]
    fn test_library_serializes_flat() {
        let library = Library {
            settings: BuildSettings {
                source_dirs: vec!["src".to_string()],
                ..Default::default()
            },
            modules: ModuleSet {
                exposed_modules: vec![ModuleName::from("Foo")],
                other_modules: vec![],
            },
        };
        let json = serde_json::to_value(&library).unwrap();
        assert_eq!(json["source-dirs"][0], "src");
        assert_eq!(json["exposed-modules"][0], "Foo");
    }
}
