// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// scopekit - commit lint rules for monorepos
///
/// Derives allowed commit types, scopes and length bounds from the projects
/// of the current workspace.
#[derive(Parser, Debug)]
#[command(name = "scopekit")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Commit lint rules derived from a monorepo's project list", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The command to run (defaults to show if not specified)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Workspace root (defaults to the current directory)
    #[arg(short, long, global = true, env = "SCOPEKIT_WORKSPACE")]
    pub workspace: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Output format for machine-readable output
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Output format for CI and scripting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text output (default)
    Text,
    /// JSON output for machine parsing
    Json,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the rule set: length bounds, types and scopes (default command)
    Show,

    /// Print lint engine rules (type-enum, scope-enum, length rules) as JSON
    Export,

    /// List allowed scopes
    Scopes,

    /// List allowed commit types
    Types,

    /// List projects discovered in the workspace
    Projects,

    /// Write an example scopekit.toml into the workspace
    Init(InitArgs),

    /// Print version information
    Version,
}

/// Arguments for the init command.
#[derive(Parser, Debug, Clone, Default)]
pub struct InitArgs {
    /// Overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,
}

impl Cli {
    /// Get the effective command, defaulting to Show if none specified.
    pub fn effective_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Show)
    }

    /// Whether JSON output was requested.
    pub fn wants_json(&self) -> bool {
        self.format == Some(OutputFormat::Json)
    }
}
