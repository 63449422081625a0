//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// cabalize - Generate Cabal package descriptions from package.toml
#[derive(Parser)]
#[command(name = "cabalize")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a package.toml in an existing directory
    Init(InitArgs),

    /// Generate the .cabal file for the current package
    Generate(GenerateArgs),

    /// List the modules discovered for each target
    Modules(ModulesArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct InitArgs {
    /// Package name (defaults to directory name)
    #[arg(long)]
    pub name: Option<String>,

    /// Directory to initialize (defaults to current directory)
    pub path: Option<PathBuf>,
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Path to package.toml
    #[arg(long, env = "CABALIZE_MANIFEST_PATH")]
    pub manifest_path: Option<PathBuf>,

    /// Print to stdout instead of writing a file
    #[arg(long)]
    pub stdout: bool,

    /// Emit the resolved package as JSON
    #[arg(long)]
    pub json: bool,

    /// Write to this file instead of <name>.cabal
    #[arg(short, long, conflicts_with = "stdout")]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct ModulesArgs {
    /// Path to package.toml
    #[arg(long, env = "CABALIZE_MANIFEST_PATH")]
    pub manifest_path: Option<PathBuf>,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
