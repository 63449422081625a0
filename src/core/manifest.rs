//! package.toml manifest parsing and schema.
//!
//! Every field is optional and stays optional after parsing: several
//! assembly rules depend on telling "not declared" apart from "declared
//! empty", so nothing is defaulted here.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Deserialize;

use crate::util::diagnostic::ManifestParseError;
use crate::util::fs;

/// A list field that may be written as a single string or an array.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum StringList {
    One(String),
    Many(Vec<String>),
}

impl StringList {
    /// Flatten into a vector.
    pub fn into_vec(self) -> Vec<String> {
        match self {
            StringList::One(s) => vec![s],
            StringList::Many(v) => v,
        }
    }

    /// Borrow as a vector of owned strings.
    pub fn to_vec(&self) -> Vec<String> {
        self.clone().into_vec()
    }
}

/// Settings shared by the package top level and every target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommonSettings {
    /// Directories searched for modules, relative to the package root.
    pub source_dirs: Vec<String>,
    /// Dependency constraints, passed through uninterpreted.
    pub dependencies: Vec<String>,
    /// Extra GHC flags.
    pub ghc_options: Vec<String>,
    /// Language extensions enabled for every module.
    pub default_extensions: Vec<String>,
}

impl CommonSettings {
    fn from_fields(
        source_dirs: &Option<StringList>,
        dependencies: &Option<StringList>,
        ghc_options: &Option<StringList>,
        default_extensions: &Option<StringList>,
    ) -> Self {
        CommonSettings {
            source_dirs: list_or_empty(source_dirs),
            dependencies: list_or_empty(dependencies),
            ghc_options: list_or_empty(ghc_options),
            default_extensions: list_or_empty(default_extensions),
        }
    }
}

fn list_or_empty(list: &Option<StringList>) -> Vec<String> {
    list.as_ref().map(StringList::to_vec).unwrap_or_default()
}

/// The `[library]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct LibrarySection {
    #[serde(default)]
    pub source_dirs: Option<StringList>,
    #[serde(default)]
    pub dependencies: Option<StringList>,
    #[serde(default)]
    pub ghc_options: Option<StringList>,
    #[serde(default)]
    pub default_extensions: Option<StringList>,

    /// Explicit public modules.
    #[serde(default)]
    pub exposed_modules: Option<StringList>,

    /// Explicit internal modules.
    #[serde(default)]
    pub other_modules: Option<StringList>,
}

impl LibrarySection {
    pub fn settings(&self) -> CommonSettings {
        CommonSettings::from_fields(
            &self.source_dirs,
            &self.dependencies,
            &self.ghc_options,
            &self.default_extensions,
        )
    }
}

/// An `[executables.<name>]` or `[tests.<name>]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ExecutableSection {
    /// Path to the file holding `main`, relative to a source directory.
    pub main: String,

    #[serde(default)]
    pub source_dirs: Option<StringList>,
    #[serde(default)]
    pub dependencies: Option<StringList>,
    #[serde(default)]
    pub ghc_options: Option<StringList>,
    #[serde(default)]
    pub default_extensions: Option<StringList>,

    /// Explicit modules; disables discovery for this target.
    #[serde(default)]
    pub other_modules: Option<StringList>,
}

impl ExecutableSection {
    /// Create a section with only a main file.
    pub fn new(main: impl Into<String>) -> Self {
        ExecutableSection {
            main: main.into(),
            source_dirs: None,
            dependencies: None,
            ghc_options: None,
            default_extensions: None,
            other_modules: None,
        }
    }

    pub fn settings(&self) -> CommonSettings {
        CommonSettings::from_fields(
            &self.source_dirs,
            &self.dependencies,
            &self.ghc_options,
            &self.default_extensions,
        )
    }
}

/// The parsed package.toml manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Manifest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub synopsis: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub maintainer: Option<String>,
    #[serde(default)]
    pub copyright: Option<String>,
    #[serde(default)]
    pub license: Option<String>,

    /// GitHub shorthand, `owner/repo`.
    #[serde(default)]
    pub github: Option<String>,

    /// Explicit homepage. An empty string suppresses the derived one.
    #[serde(default)]
    pub homepage: Option<String>,

    /// Explicit issue tracker. An empty string suppresses the derived one.
    #[serde(default)]
    pub bug_reports: Option<String>,

    /// Package-wide defaults merged into every target.
    #[serde(default)]
    pub source_dirs: Option<StringList>,
    #[serde(default)]
    pub dependencies: Option<StringList>,
    #[serde(default)]
    pub ghc_options: Option<StringList>,
    #[serde(default)]
    pub default_extensions: Option<StringList>,

    #[serde(default)]
    pub library: Option<LibrarySection>,

    #[serde(default)]
    pub executables: BTreeMap<String, ExecutableSection>,

    #[serde(default)]
    pub tests: BTreeMap<String, ExecutableSection>,

    /// The file this manifest was read from.
    #[serde(skip)]
    pub manifest_path: PathBuf,
}

impl Manifest {
    /// Load a manifest from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(Self::parse(&content, path)?)
    }

    /// Parse manifest content.
    pub fn parse(content: &str, path: &Path) -> Result<Self, ManifestParseError> {
        let mut manifest: Manifest = toml::from_str(content)
            .map_err(|e| ManifestParseError::from_toml(path, content, &e))?;
        manifest.manifest_path = path.to_path_buf();
        Ok(manifest)
    }

    /// Package-wide settings.
    pub fn settings(&self) -> CommonSettings {
        CommonSettings::from_fields(
            &self.source_dirs,
            &self.dependencies,
            &self.ghc_options,
            &self.default_extensions,
        )
    }

    /// The directory containing this manifest.
    pub fn root(&self) -> &Path {
        self.manifest_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."))
    }
}

/// Generate a starter package.toml.
pub fn generate_default_manifest(name: &str) -> String {
    format!(
        r#"name = "{name}"
version = "0.1.0"
license = "MIT"
dependencies = ["base"]
ghc-options = ["-Wall"]

[library]
source-dirs = ["src"]

[executables.{name}]
main = "Main.hs"
source-dirs = ["app"]
dependencies = ["{name}"]
"#
    )
}
