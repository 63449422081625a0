//! Filesystem utilities.
//!
//! Module discovery never calls `std::fs` directly. It goes through the
//! [`FileSystem`] capability, so the same code runs against a package
//! directory on disk or an in-memory tree in unit tests.

use std::fs;
use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result};
use walkdir::WalkDir;

/// A file path split into its components, relative to some root.
pub type Segments = Vec<String>;

/// Read access to a package directory.
///
/// Every path handed to these methods is relative to the package root.
pub trait FileSystem: Sync {
    /// Whether `path` exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Whether `path` exists and is a regular file.
    fn is_file(&self, path: &Path) -> bool;

    /// Lazily enumerate every regular file beneath `dir`, recursively.
    ///
    /// Each item is the file's path relative to `dir`, split into segments.
    /// Files whose path is not valid UTF-8 are skipped.
    /// The directory must exist; a missing directory surfaces as an error item.
    fn walk_files<'a>(&'a self, dir: &Path) -> Box<dyn Iterator<Item = Result<Segments>> + 'a>;

    /// Base name of the package root directory.
    fn root_name(&self) -> Result<String>;
}

/// [`FileSystem`] backed by a real directory.
#[derive(Debug, Clone)]
pub struct DiskFileSystem {
    root: PathBuf,
}

impl DiskFileSystem {
    /// Create a filesystem rooted at the given package directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        DiskFileSystem { root: root.into() }
    }
}

impl FileSystem for DiskFileSystem {
    fn is_dir(&self, path: &Path) -> bool {
        self.root.join(path).is_dir()
    }

    fn is_file(&self, path: &Path) -> bool {
        self.root.join(path).is_file()
    }

    fn walk_files<'a>(&'a self, dir: &Path) -> Box<dyn Iterator<Item = Result<Segments>> + 'a> {
        let base = self.root.join(dir);
        let walker = WalkDir::new(&base)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter();

        Box::new(walker.filter_map(move |entry| {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    return Some(
                        Err(e).with_context(|| format!("failed to walk {}", base.display())),
                    )
                }
            };
            if !entry.file_type().is_file() {
                return None;
            }
            let relative = entry.path().strip_prefix(&base).unwrap_or(entry.path());
            let segments = path_segments(relative);
            if segments.is_none() {
                tracing::debug!("skipping non-UTF-8 path {}", entry.path().display());
            }
            segments.map(Ok)
        }))
    }

    fn root_name(&self) -> Result<String> {
        let root = self
            .root
            .canonicalize()
            .with_context(|| format!("failed to resolve directory: {}", self.root.display()))?;
        root.file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string)
            .with_context(|| format!("directory has no UTF-8 name: {}", root.display()))
    }
}

/// Split a relative path into its normal components.
///
/// `.` components are dropped; anything else that is not a plain name
/// (root, prefix, `..`) is kept verbatim so callers can reject it.
/// Returns `None` if any component is not valid UTF-8.
pub fn path_segments(path: &Path) -> Option<Segments> {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .map(|c| c.as_os_str().to_str().map(str::to_string))
        .collect()
}

/// Ensure a directory exists, creating it if necessary.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("failed to create directory: {}", path.display()))?;
    }
    Ok(())
}

/// Read a file to string, with nice error messages.
pub fn read_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read file: {}", path.display()))
}

/// Write a string to a file, creating parent directories if needed.
pub fn write_string(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_dir(parent)?;
        }
    }
    fs::write(path, contents).with_context(|| format!("failed to write file: {}", path.display()))
}
