//! Test utilities and mocks for cabalize unit tests.
//!
//! [`MockFileSystem`] is an in-memory package directory implementing
//! [`FileSystem`], so discovery and assembly can be tested without touching
//! the disk.
//!
//! # Example
//!
//! ```rust,ignore
//! use cabalize::test_support::MockFileSystem;
//!
//! let mut fs = MockFileSystem::new();
//! fs.add_file("src/Foo.hs", "module Foo where");
//! let modules = discover_modules(&fs, &["src"])?;
//! ```

pub mod fixtures;

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::path::{Component, Path, PathBuf};

use anyhow::{anyhow, Result};

use crate::util::fs::{path_segments, FileSystem, Segments};

pub use fixtures::*;

/// Mock filesystem for testing without real I/O.
#[derive(Debug, Clone)]
pub struct MockFileSystem {
    files: BTreeMap<PathBuf, Vec<u8>>,
    dirs: BTreeSet<PathBuf>,
    failing: HashSet<PathBuf>,
    root_name: String,
}

impl Default for MockFileSystem {
    fn default() -> Self {
        MockFileSystem::new()
    }
}

impl MockFileSystem {
    /// Create a new empty mock filesystem whose root is named `package`.
    pub fn new() -> Self {
        MockFileSystem {
            files: BTreeMap::new(),
            dirs: BTreeSet::new(),
            failing: HashSet::new(),
            root_name: "package".to_string(),
        }
    }

    /// Set the name reported for the package root.
    pub fn with_root_name(mut self, name: impl Into<String>) -> Self {
        self.root_name = name.into();
        self
    }

    /// Add a file with the given content, creating its parent directories.
    pub fn add_file(&mut self, path: impl AsRef<Path>, content: impl Into<Vec<u8>>) {
        let path = normalize(path.as_ref());
        if let Some(parent) = path.parent() {
            self.add_dir(parent);
        }
        self.files.insert(path, content.into());
    }

    /// Add a directory and all its parents.
    pub fn add_dir(&mut self, path: impl AsRef<Path>) {
        let mut current = normalize(path.as_ref());
        while !current.as_os_str().is_empty() {
            self.dirs.insert(current.clone());
            if !current.pop() {
                break;
            }
        }
    }

    /// Make every walk of `dir` fail with an I/O error.
    pub fn fail_walk(&mut self, dir: impl AsRef<Path>) {
        self.failing.insert(normalize(dir.as_ref()));
    }
}

impl FileSystem for MockFileSystem {
    fn is_dir(&self, path: &Path) -> bool {
        let path = normalize(path);
        path.as_os_str().is_empty() || self.dirs.contains(&path)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.files.contains_key(&normalize(path))
    }

    fn walk_files<'a>(&'a self, dir: &Path) -> Box<dyn Iterator<Item = Result<Segments>> + 'a> {
        let dir = normalize(dir);
        if self.failing.contains(&dir) {
            return Box::new(std::iter::once(Err(anyhow!(
                "permission denied: {}",
                dir.display()
            ))));
        }
        if !self.is_dir(&dir) {
            return Box::new(std::iter::once(Err(anyhow!(
                "no such directory: {}",
                dir.display()
            ))));
        }

        Box::new(self.files.keys().filter_map(move |path| {
            path.strip_prefix(&dir)
                .ok()
                .and_then(path_segments)
                .map(Ok)
        }))
    }

    fn root_name(&self) -> Result<String> {
        Ok(self.root_name.clone())
    }
}

fn normalize(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_fs_tracks_parent_dirs() {
        let mut fs = MockFileSystem::new();
        fs.add_file("src/Data/Map.hs", "");

        assert!(fs.is_dir(Path::new("src")));
        assert!(fs.is_dir(Path::new("./src/Data")));
        assert!(fs.is_file(Path::new("src/Data/Map.hs")));
        assert!(!fs.is_dir(Path::new("src/Data/Map.hs")));
    }

    #[test]
    fn test_mock_fs_walk() {
        let mut fs = MockFileSystem::new();
        fs.add_file("src/B.hs", "");
        fs.add_file("src/A/C.hs", "");
        fs.add_file("app/Main.hs", "");

        let files: Vec<Segments> = fs
            .walk_files(Path::new("src"))
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(
            files,
            vec![
                vec!["A".to_string(), "C.hs".to_string()],
                vec!["B.hs".to_string()],
            ]
        );
    }

    #[test]
    fn test_mock_fs_walk_missing_dir() {
        let fs = MockFileSystem::new();
        let result: Result<Vec<Segments>> = fs.walk_files(Path::new("src")).collect();
        assert!(result.is_err());
    }

    #[test]
    fn test_mock_fs_files_and_root_name() {
        let mut fs = MockFileSystem::new().with_root_name("demo");
        fs.add_file("LICENSE", "MIT");

        assert!(fs.is_file(Path::new("LICENSE")));
        assert!(fs.is_file(Path::new("./LICENSE")));
        assert!(!fs.is_file(Path::new("missing")));
        assert_eq!(fs.root_name().unwrap(), "demo");
    }
}
