//! Locating the package manifest.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::util::diagnostic::suggestions;

/// Canonical manifest file name.
pub const MANIFEST_NAME: &str = "package.toml";

/// Errors from manifest discovery.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// No manifest found in the directory or any parent.
    #[error(
        "could not find `package.toml` in {} or any parent directory\n{}",
        .dir.display(),
        suggestions::NO_MANIFEST
    )]
    NotFound { dir: PathBuf },
}

/// Find the manifest in `dir` itself.
pub fn find_manifest(dir: &Path) -> Result<PathBuf, ManifestError> {
    let path = dir.join(MANIFEST_NAME);
    if path.is_file() {
        Ok(path)
    } else {
        Err(ManifestError::NotFound {
            dir: dir.to_path_buf(),
        })
    }
}

/// Find the manifest in `start` or the nearest parent directory holding one.
pub fn find_manifest_upwards(start: &Path) -> Result<PathBuf, ManifestError> {
    let mut current = start.to_path_buf();
    loop {
        if let Ok(path) = find_manifest(&current) {
            return Ok(path);
        }
        if !current.pop() {
            return Err(ManifestError::NotFound {
                dir: start.to_path_buf(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_find_manifest_in_dir() {
        let tmp = TempDir::new().unwrap();
        let manifest = tmp.path().join(MANIFEST_NAME);
        std::fs::write(&manifest, "name = \"demo\"\n").unwrap();

        assert_eq!(find_manifest(tmp.path()).unwrap(), manifest);
    }

    #[test]
    fn test_find_manifest_upwards() {
        let tmp = TempDir::new().unwrap();
        let manifest = tmp.path().join(MANIFEST_NAME);
        std::fs::write(&manifest, "name = \"demo\"\n").unwrap();
        let nested = tmp.path().join("src").join("Data");
        std::fs::create_dir_all(&nested).unwrap();

        assert_eq!(find_manifest_upwards(&nested).unwrap(), manifest);
    }

    #[test]
    fn test_find_manifest_missing() {
        let tmp = TempDir::new().unwrap();
        let err = find_manifest(tmp.path()).unwrap_err();
        assert!(err.to_string().contains("could not find `package.toml`"));
        assert!(err.to_string().contains("cabalize init"));
    }
}
