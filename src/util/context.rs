//! Global context for cabalize operations.
//!
//! Provides centralized access to the working directory, configuration
//! locations, and output preferences.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use anyhow::{Context, Result};
use directories::ProjectDirs;

use crate::core::workspace::{find_manifest_upwards, ManifestError};
use crate::util::config::{load_config, Config};

/// Environment variable overriding the user-wide config directory.
pub const CONFIG_HOME_ENV: &str = "CABALIZE_CONFIG_HOME";

/// Project directories for cabalize
static PROJECT_DIRS: LazyLock<Option<ProjectDirs>> =
    LazyLock::new(|| ProjectDirs::from("com", "cabalize", "cabalize"));

/// Global context containing configuration paths and output settings.
#[derive(Debug, Clone)]
pub struct GlobalContext {
    /// Current working directory
    cwd: PathBuf,

    /// Directory holding the user-wide config file
    config_home: PathBuf,

    /// Whether to use verbose output
    verbose: bool,

    /// Whether to use colors in output
    color: bool,
}

impl GlobalContext {
    /// Create a new GlobalContext for the current directory.
    ///
    /// `CABALIZE_CONFIG_HOME` overrides the user-wide config directory.
    pub fn new() -> Result<Self> {
        let cwd = std::env::current_dir().context("failed to get current directory")?;
        let ctx = Self::with_cwd(cwd);
        Ok(match std::env::var_os(CONFIG_HOME_ENV) {
            Some(home) if !home.is_empty() => ctx.with_config_home(PathBuf::from(home)),
            _ => ctx,
        })
    }

    /// Create a GlobalContext with a specific working directory.
    pub fn with_cwd(cwd: PathBuf) -> Self {
        let config_home = match PROJECT_DIRS.as_ref() {
            Some(dirs) => dirs.config_dir().to_path_buf(),
            None => cwd.join(".cabalize"),
        };

        GlobalContext {
            cwd,
            config_home,
            verbose: false,
            color: true,
        }
    }

    /// Override the user-wide config directory.
    pub fn with_config_home(mut self, config_home: PathBuf) -> Self {
        self.config_home = config_home;
        self
    }

    /// Set verbose mode.
    pub fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    /// Set color output.
    pub fn set_color(&mut self, color: bool) {
        self.color = color;
    }

    /// Get the current working directory.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Get the global configuration file path.
    pub fn config_path(&self) -> PathBuf {
        self.config_home.join("config.toml")
    }

    /// Get the project configuration file path for a package root.
    pub fn project_config_path(&self, root: &Path) -> PathBuf {
        root.join(".cabalize").join("config.toml")
    }

    /// Load configuration for a package root (global + project).
    pub fn config(&self, root: &Path) -> Config {
        load_config(&self.config_path(), &self.project_config_path(root))
    }

    /// Check if verbose mode is enabled.
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Check if color output is enabled.
    pub fn color(&self) -> bool {
        self.color
    }

    /// Find `package.toml` starting from cwd and searching upward.
    pub fn find_manifest(&self) -> Result<PathBuf, ManifestError> {
        find_manifest_upwards(&self.cwd)
    }
}
