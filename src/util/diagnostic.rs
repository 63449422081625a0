//! User-friendly diagnostic messages.
//!
//! A malformed manifest is the one fatal error users hit routinely, so it gets
//! a rich miette diagnostic pointing at the offending line and column.

use std::fmt;
use std::path::{Path, PathBuf};

use miette::{Diagnostic as MietteDiagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Common suggestion messages for consistent error handling.
pub mod suggestions {
    /// Suggestion when no manifest file is found.
    pub const NO_MANIFEST: &str = "help: Run `cabalize init` to create a package.toml";
}

/// A 1-based line and column within a source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl Location {
    /// Compute the location of a byte offset.
    pub fn of_offset(source: &str, offset: usize) -> Self {
        let offset = offset.min(source.len());
        let before = &source.as_bytes()[..offset];
        let line = before.iter().filter(|&&b| b == b'\n').count() + 1;
        let line_start = before
            .iter()
            .rposition(|&b| b == b'\n')
            .map(|i| i + 1)
            .unwrap_or(0);
        let column = String::from_utf8_lossy(&before[line_start..]).chars().count() + 1;
        Location { line, column }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The manifest could not be parsed or failed schema validation.
#[derive(Debug, Error, MietteDiagnostic)]
#[error("{}: {message}", display_location(.path, .line, .column))]
#[diagnostic(
    code(cabalize::manifest::parse),
    help("Fix the manifest and run `cabalize generate` again")
)]
pub struct ManifestParseError {
    pub path: PathBuf,
    pub message: String,
    pub line: Option<usize>,
    pub column: Option<usize>,
    #[source_code]
    pub src: NamedSource<String>,
    #[label("here")]
    pub span: Option<SourceSpan>,
}

impl ManifestParseError {
    /// Build a diagnostic from a TOML deserialization error.
    pub fn from_toml(path: &Path, content: &str, err: &toml::de::Error) -> Self {
        let span = err.span();
        let location = span
            .as_ref()
            .map(|range| Location::of_offset(content, range.start));

        ManifestParseError {
            path: path.to_path_buf(),
            message: err.message().trim().to_string(),
            line: location.map(|l| l.line),
            column: location.map(|l| l.column),
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: span.map(SourceSpan::from),
        }
    }
}

fn display_location(path: &Path, line: &Option<usize>, column: &Option<usize>) -> String {
    match (line, column) {
        (Some(line), Some(column)) => {
            let location = Location {
                line: *line,
                column: *column,
            };
            format!("{}:{}", path.display(), location)
        }
        _ => path.display().to_string(),
    }
}
