// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// vcm - Validate commit messages against project conventions
#[derive(Parser, Debug)]
#[command(name = "vcm")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Validate commit messages against project conventions", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The command to run
    #[command(subcommand)]
    pub command: Commands,

    /// Preset to validate against (default: angular)
    #[arg(short, long, global = true)]
    pub preset: Option<String>,

    /// Do not report messages skipped by an ignore pattern
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Output format for machine-readable output
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
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
    /// Validate a commit message given on the command line
    Check(CheckArgs),

    /// Validate a commit message file (use from a commit-msg hook)
    File(FileArgs),

    /// List available presets
    Presets,

    /// Print version information
    Version,

    /// Write an example vcm.toml in the current directory
    Init(InitArgs),
}

/// Arguments for the check command.
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// The commit message
    pub message: String,
}

/// Arguments for the file command.
#[derive(Parser, Debug, Clone)]
pub struct FileArgs {
    /// Path to the commit message file, e.g. .git/COMMIT_EDITMSG
    pub path: PathBuf,
}

/// Arguments for the init command.
#[derive(Parser, Debug, Clone, Default)]
pub struct InitArgs {
    /// Overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,
}

impl Cli {
    /// Check if JSON output was requested.
    pub fn is_json(&self) -> bool {
        self.format == Some(OutputFormat::Json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_debug() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_check() {
        let args = Cli::parse_from(["vcm", "check", "feat: add thing", "--preset", "atom"]);
        if let Commands::Check(check_args) = args.command {
            assert_eq!(check_args.message, "feat: add thing");
        } else {
            panic!("Expected Check command");
        }
        assert_eq!(args.preset.as_deref(), Some("atom"));
    }

    #[test]
    fn test_parse_file() {
        let args = Cli::parse_from(["vcm", "-q", "file", ".git/COMMIT_EDITMSG"]);
        assert!(args.quiet);
        assert!(matches!(args.command, Commands::File(ref f) if f.path.ends_with("COMMIT_EDITMSG")));
    }

    #[test]
    fn test_global_flags() {
        let args = Cli::parse_from(["vcm", "presets", "--format", "json", "--no-color"]);
        assert!(args.is_json());
        assert!(args.no_color);
        assert!(matches!(args.command, Commands::Presets));
    }

    #[test]
    fn test_command_required() {
        assert!(Cli::try_parse_from(["vcm"]).is_err());
    }
}
