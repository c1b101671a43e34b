// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use std::path::Path;

use crate::config::VcmConfig;
use crate::diagnostics::{ConsoleSink, Diagnostic, DiagnosticSink};
use crate::error::{ConfigError, Result, ValidationError, VcmError};
use crate::presets::Preset;
use crate::validate::{validate_message, validate_message_from_file, ValidateOptions};

use super::args::{Cli, Commands, InitArgs};

/// Where the commit message comes from.
enum Source<'a> {
    Text(&'a str),
    File(&'a Path),
}

impl Source<'_> {
    fn validate(&self, options: &ValidateOptions, sink: &mut dyn DiagnosticSink) -> Result<bool> {
        match self {
            Source::Text(message) => validate_message(message, options, sink),
            Source::File(path) => validate_message_from_file(path, options, sink),
        }
    }
}

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    // Load configuration
    let config = if let Some(config_path) = &cli.config {
        VcmConfig::load_from(config_path)?
    } else {
        VcmConfig::load()?
    };

    if cli.no_color || !config.ui.color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    // Dispatch to the appropriate command handler
    match &cli.command {
        Commands::Check(args) => run_check(&cli, &config, Source::Text(&args.message)),
        Commands::File(args) => run_check(&cli, &config, Source::File(&args.path)),
        Commands::Presets => run_presets(&cli),
        Commands::Version => run_version(),
        Commands::Init(args) => run_init(args),
    }
}

/// Build validation options. Flags win over the config file, which wins
/// over the environment.
fn validate_options(cli: &Cli, config: &VcmConfig) -> ValidateOptions {
    ValidateOptions {
        preset: cli.preset.clone().or_else(|| config.preset.clone()),
        quiet: if cli.quiet { Some(true) } else { config.quiet },
    }
}

/// Run the check and file commands.
fn run_check(cli: &Cli, config: &VcmConfig, source: Source<'_>) -> Result<()> {
    let options = validate_options(cli, config);
    let preset = options.preset_name().to_string();

    tracing::debug!("Running check with options: {:?}", options);

    let valid = if cli.is_json() {
        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        let valid = source.validate(&options, &mut diagnostics)?;
        print_json(&serde_json::json!({
            "valid": valid,
            "preset": preset,
            "diagnostics": diagnostics,
        }));
        valid
    } else {
        source.validate(&options, &mut ConsoleSink)?
    };

    if valid {
        Ok(())
    } else {
        Err(VcmError::Validation(ValidationError::Rejected { preset }))
    }
}

/// Run the presets command.
fn run_presets(cli: &Cli) -> Result<()> {
    if cli.is_json() {
        let presets: Vec<_> = Preset::ALL
            .iter()
            .map(|preset| {
                serde_json::json!({
                    "name": preset.name(),
                    "format": preset.description(),
                    "max_length": preset.length_limit().to_string(),
                    "ignore_pattern": preset.has_ignore_pattern(),
                })
            })
            .collect();
        print_json(&serde_json::Value::Array(presets));
        return Ok(());
    }

    for preset in Preset::ALL {
        println!(
            "{:<8} {:<40} length {}",
            console::style(preset.name()).cyan().bold(),
            preset.description(),
            preset.length_limit()
        );
    }

    Ok(())
}

/// Run the version command.
fn run_version() -> Result<()> {
    println!("vcm {}", crate::version::version_string());

    if let Some(sha) = crate::version::GIT_SHA {
        println!("git commit: {}", sha);
    }
    if let Some(date) = crate::version::GIT_COMMIT_DATE {
        println!("commit date: {}", date);
    }

    Ok(())
}

/// Run the init command.
fn run_init(args: &InitArgs) -> Result<()> {
    use crate::config::default::example_config;

    tracing::debug!("Running init command with args: {:?}", args);

    let config_path = Path::new("vcm.toml");

    if config_path.exists() && !args.force {
        return Err(VcmError::Config(ConfigError::AlreadyExists {
            path: config_path.to_path_buf(),
        }));
    }

    std::fs::write(config_path, example_config())?;

    println!("✓ Created vcm.toml");

    Ok(())
}

fn print_json(value: &serde_json::Value) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).unwrap_or_default()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::parse_from(["vcm", "--preset", "atom", "-q", "check", "x"]);
        let config = VcmConfig {
            preset: Some("eslint".to_string()),
            quiet: Some(false),
            ..VcmConfig::default()
        };
        let options = validate_options(&cli, &config);
        assert_eq!(options.preset_name(), "atom");
        assert_eq!(options.quiet, Some(true));
    }

    #[test]
    fn test_config_fills_missing_flags() {
        let cli = Cli::parse_from(["vcm", "check", "x"]);
        let config = VcmConfig {
            preset: Some("ember".to_string()),
            ..VcmConfig::default()
        };
        let options = validate_options(&cli, &config);
        assert_eq!(options.preset_name(), "ember");
        assert_eq!(options.quiet, None);
    }

    #[test]
    fn test_defaults_without_config() {
        let cli = Cli::parse_from(["vcm", "check", "x"]);
        let options = validate_options(&cli, &VcmConfig::default());
        assert_eq!(options, ValidateOptions::new());
    }
}
