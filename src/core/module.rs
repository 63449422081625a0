//! Module names and the file-path-to-module translation.
//!
//! A Haskell module `Data.Parser` lives at `Data/Parser.hs` beneath one of a
//! target's source directories. [`ModulePath::from_segments`] performs that
//! mapping in reverse and is the only place that decides which files count as
//! modules.

use std::borrow::Borrow;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::util::fs::path_segments;

/// File extensions recognized as Haskell source.
pub const SOURCE_EXTENSIONS: &[&str] = &["hs", "lhs"];

/// A module as a sequence of name components, e.g. `["Data", "Parser"]`.
///
/// Every component is non-empty and contains no `.` or path separator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModulePath(Vec<String>);

impl ModulePath {
    /// Translate a relative file path, given as segments, into a module path.
    ///
    /// Returns `None` if the last segment does not carry a source extension or
    /// if any component (including the file stem) is not a valid module name
    /// component. Never fails otherwise.
    pub fn from_segments<S: AsRef<str>>(segments: &[S]) -> Option<Self> {
        let (file, dirs) = segments.split_last()?;
        let stem = strip_source_extension(file.as_ref())?;

        let components: Vec<String> = dirs
            .iter()
            .map(|s| s.as_ref().to_string())
            .chain(std::iter::once(stem.to_string()))
            .collect();

        if components.iter().all(|c| is_module_component(c)) {
            Some(ModulePath(components))
        } else {
            None
        }
    }

    /// Translate a relative file path into a module path.
    ///
    /// Paths that are not valid UTF-8 never name a module.
    pub fn from_path(path: &Path) -> Option<Self> {
        Self::from_segments(&path_segments(path)?)
    }

    /// The dotted module name.
    pub fn name(&self) -> ModuleName {
        ModuleName(self.0.join("."))
    }
}

impl fmt::Display for ModulePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("."))
    }
}

fn strip_source_extension(file: &str) -> Option<&str> {
    let (stem, ext) = file.rsplit_once('.')?;
    SOURCE_EXTENSIONS.contains(&ext).then_some(stem)
}

fn is_module_component(component: &str) -> bool {
    !component.is_empty() && !component.contains(['.', '/', '\\'])
}

/// A dotted module name such as `Data.Parser`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleName(String);

impl ModuleName {
    /// Get the dotted name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ModuleName {
    fn from(s: &str) -> Self {
        ModuleName(s.to_string())
    }
}

impl From<String> for ModuleName {
    fn from(s: String) -> Self {
        ModuleName(s)
    }
}

impl AsRef<str> for ModuleName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ModuleName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for ModuleName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ModuleName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// The exposed/other partition of a library's modules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ModuleSet {
    /// Modules forming the public surface.
    pub exposed_modules: Vec<ModuleName>,
    /// Internal modules.
    pub other_modules: Vec<ModuleName>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(segments: &[&str]) -> Option<String> {
        ModulePath::from_segments(segments).map(|m| m.name().as_str().to_string())
    }

    #[test]
    fn test_translate_nested_path() {
        assert_eq!(name(&["Foo", "Bar.hs"]), Some("Foo.Bar".to_string()));
        assert_eq!(name(&["Main.hs"]), Some("Main".to_string()));
    }

    #[test]
    fn test_translate_literate_haskell() {
        assert_eq!(name(&["Data", "Doc.lhs"]), Some("Data.Doc".to_string()));
    }

    #[test]
    fn test_translate_rejects_hidden_files() {
        assert_eq!(name(&["Foo", ".hidden.hs"]), None);
        assert_eq!(name(&[".hs"]), None);
    }

    #[test]
    fn test_translate_rejects_other_extensions() {
        assert_eq!(name(&["Foo", "Bar.txt"]), None);
        assert_eq!(name(&["Foo", "Bar.hs.orig"]), None);
        assert_eq!(name(&["Makefile"]), None);
    }

    #[test]
    fn test_translate_rejects_dotted_stems_and_dirs() {
        assert_eq!(name(&["Foo.Bar.hs"]), None);
        assert_eq!(name(&["some.dir", "Foo.hs"]), None);
        assert_eq!(name(&["", "Foo.hs"]), None);
    }

    #[test]
    fn test_translate_does_not_enforce_capitalization() {
        assert_eq!(name(&["internal", "helpers.hs"]), Some("internal.helpers".to_string()));
    }

    #[test]
    fn test_translate_empty_path() {
        let empty: [&str; 0] = [];
        assert_eq!(ModulePath::from_segments(&empty), None);
    }

    #[test]
    fn test_from_path() {
        let module = ModulePath::from_path(Path::new("Data/Map/Strict.hs")).unwrap();
        assert_eq!(module.to_string(), "Data.Map.Strict");
        assert_eq!(module.name(), "Data.Map.Strict");
        assert_eq!(ModulePath::from_path(Path::new("../Main.hs")), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_from_path_rejects_non_utf8() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let path = Path::new(OsStr::from_bytes(b"Data/Caf\xe9.hs"));
        assert_eq!(ModulePath::from_path(path), None);
    }

    #[test]
    fn test_module_name_comparisons() {
        let module = ModuleName::from("Foo.Bar");
        assert_eq!(module, "Foo.Bar");
        assert_eq!(module.to_string(), "Foo.Bar");
    }
}
