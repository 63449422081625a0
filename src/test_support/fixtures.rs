//! Test fixtures for common package layouts.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::MockFileSystem;

/// Fixture for a package directory: a manifest plus source files.
#[derive(Debug, Clone)]
pub struct ProjectFixture {
    /// Directory name of the package.
    pub name: String,
    /// package.toml content.
    pub manifest: String,
    /// Files (path relative to package root -> content).
    pub files: BTreeMap<PathBuf, String>,
}

impl ProjectFixture {
    /// Create a new empty package fixture.
    pub fn new(name: impl Into<String>) -> Self {
        ProjectFixture {
            name: name.into(),
            manifest: String::new(),
            files: BTreeMap::new(),
        }
    }

    /// A library with `src/A.hs`, `src/B.hs` and `src/Sub/C.hs`.
    pub fn library(name: impl Into<String>) -> Self {
        let name = name.into();
        let manifest = format!(
            r#"name = "{name}"
version = "1.0.0"
dependencies = ["base"]

[library]
source-dirs = ["src"]
"#
        );

        Self::new(name)
            .with_manifest(manifest)
            .with_module("src", "A")
            .with_module("src", "B")
            .with_module("src", "Sub.C")
    }

    /// A library plus an executable in `app/` and a test suite in `test/`.
    pub fn full(name: impl Into<String>) -> Self {
        let name = name.into();
        let manifest = format!(
            r#"name = "{name}"
version = "0.2.0"
github = "example/{name}"
dependencies = ["base"]
ghc-options = "-Wall"

[library]
source-dirs = ["src"]

[executables.{name}]
main = "Main.hs"
source-dirs = ["app"]
dependencies = ["{name}"]

[tests.spec]
main = "Spec.hs"
source-dirs = ["test"]
dependencies = ["hspec", "{name}"]
"#
        );

        Self::new(name)
            .with_manifest(manifest)
            .with_module("src", "Lib")
            .with_module("src", "Lib.Internal")
            .with_module("app", "Main")
            .with_module("app", "Options")
            .with_module("test", "Spec")
            .with_module("test", "LibSpec")
            .with_file("LICENSE", "MIT License\n")
    }

    /// Set the manifest content.
    pub fn with_manifest(mut self, manifest: impl Into<String>) -> Self {
        self.manifest = manifest.into();
        self
    }

    /// Add an arbitrary file.
    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.files.insert(path.into(), content.into());
        self
    }

    /// Add a Haskell module under a source directory.
    pub fn with_module(self, source_dir: &str, module: &str) -> Self {
        let mut path = PathBuf::from(source_dir);
        for component in module.split('.') {
            path.push(component);
        }
        path.set_extension("hs");
        self.with_file(path, format!("module {module} where\n"))
    }

    /// Write this fixture to a real directory, returning the package root.
    pub fn write_to(&self, base_path: &Path) -> std::io::Result<PathBuf> {
        let project_path = base_path.join(&self.name);
        std::fs::create_dir_all(&project_path)?;

        if !self.manifest.is_empty() {
            std::fs::write(project_path.join("package.toml"), &self.manifest)?;
        }

        for (path, content) in &self.files {
            let full_path = project_path.join(path);
            if let Some(parent) = full_path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(full_path, content)?;
        }

        Ok(project_path)
    }

    /// Build an in-memory filesystem holding this fixture's files.
    pub fn to_mock(&self) -> MockFileSystem {
        let mut fs = MockFileSystem::new().with_root_name(&self.name);
        for (path, content) in &self.files {
            fs.add_file(path, content.as_bytes());
        }
        fs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::fs::FileSystem;
    use tempfile::TempDir;

    #[test]
    fn test_with_module_paths() {
        let fixture = ProjectFixture::new("p").with_module("src", "Data.Map");
        assert!(fixture.files.contains_key(Path::new("src/Data/Map.hs")));
    }

    #[test]
    fn test_write_to_disk() {
        let tmp = TempDir::new().unwrap();
        let root = ProjectFixture::library("demo").write_to(tmp.path()).unwrap();

        assert!(root.join("package.toml").exists());
        assert!(root.join("src/Sub/C.hs").exists());
    }

    #[test]
    fn test_to_mock() {
        let fs = ProjectFixture::full("demo").to_mock();
        assert!(fs.is_file(Path::new("LICENSE")));
        assert!(fs.is_dir(Path::new("app")));
        assert_eq!(fs.root_name().unwrap(), "demo");
    }
}
