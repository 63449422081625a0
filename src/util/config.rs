//! Configuration file support for cabalize.
//!
//! cabalize supports two configuration file locations:
//! - Global: `<config dir>/cabalize/config.toml` - User-wide defaults
//! - Project: `.cabalize/config.toml` - Project-specific overrides
//!
//! Project config takes precedence over global config.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::ops::assemble::AssembleOptions;
use crate::ops::render::RenderOptions;

/// cabalize configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output settings
    pub render: RenderConfig,

    /// Module discovery settings
    pub discover: DiscoverConfig,
}

/// Settings for the generated `.cabal` file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RenderConfig {
    /// Indentation of fields inside stanzas (default: 2)
    pub indent: Option<usize>,

    /// Value written to the `cabal-version` field (default: `>= 1.10`)
    pub cabal_version: Option<String>,
}

/// Settings for module discovery.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoverConfig {
    /// Assemble targets in parallel (default: true)
    pub parallel: Option<bool>,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if file doesn't exist.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {:#}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        if other.render.indent.is_some() {
            self.render.indent = other.render.indent;
        }
        if other.render.cabal_version.is_some() {
            self.render.cabal_version = other.render.cabal_version;
        }
        if other.discover.parallel.is_some() {
            self.discover.parallel = other.discover.parallel;
        }
    }

    /// Rendering options with defaults filled in.
    pub fn render_options(&self) -> RenderOptions {
        let defaults = RenderOptions::default();
        RenderOptions {
            indent: self.render.indent.unwrap_or(defaults.indent),
            cabal_version: self
                .render
                .cabal_version
                .clone()
                .unwrap_or(defaults.cabal_version),
        }
    }

    /// Assembly options with defaults filled in.
    pub fn assemble_options(&self) -> AssembleOptions {
        AssembleOptions {
            parallel: self
                .discover
                .parallel
                .unwrap_or(AssembleOptions::default().parallel),
        }
    }
}

/// Load configuration from global and project locations.
pub fn load_config(global_path: &Path, project_path: &Path) -> Config {
    // Global first; project config overrides it
    let mut config = Config::load_or_default(global_path);
    config.merge(Config::load_or_default(project_path));
    config
}
