// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration loading.

use crate::error::{ConfigError, Result, VcmError};
use std::path::{Path, PathBuf};

use super::schema::VcmConfig;

/// Configuration file names to search for, in order of priority.
const CONFIG_FILES: &[&str] = &["vcm.toml", ".vcm.toml", ".config/vcm.toml"];

/// Find the configuration file in the current directory or parent directories.
pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    find_config_file_from(&current_dir)
}

/// Find the configuration file starting from a specific directory.
pub fn find_config_file_from(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        for config_name in CONFIG_FILES {
            let config_path = current.join(config_name);
            if config_path.is_file() {
                return Some(config_path);
            }
        }

        if !current.pop() {
            break;
        }
    }

    if let Some(home) = dirs::home_dir() {
        for config_name in CONFIG_FILES {
            let config_path = home.join(config_name);
            if config_path.is_file() {
                return Some(config_path);
            }
        }
    }

    // XDG config directory
    let vcm_config = dirs::config_dir()?.join("vcm").join("config.toml");
    vcm_config.is_file().then_some(vcm_config)
}

/// Load configuration from the default locations.
pub fn load_config() -> Result<VcmConfig> {
    match find_config_file() {
        Some(path) => load_config_from(&path),
        None => {
            tracing::debug!("No configuration file found, using defaults");
            Ok(VcmConfig::default())
        }
    }
}

/// Load configuration from a specific path.
pub fn load_config_from(path: &Path) -> Result<VcmConfig> {
    tracing::debug!("Loading configuration from: {:?}", path);

    if !path.exists() {
        return Err(VcmError::Config(ConfigError::NotFound {
            path: path.to_path_buf(),
        }));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        VcmError::Config(ConfigError::ParseError {
            message: format!("Failed to read config file: {}", e),
        })
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
pub fn parse_config(content: &str) -> Result<VcmConfig> {
    toml::from_str(content).map_err(|e| {
        VcmError::Config(ConfigError::ParseError {
            message: format!("Failed to parse TOML: {}", e),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_config() {
        let config = parse_config("").unwrap();
        assert_eq!(config, VcmConfig::default());
    }

    #[test]
    fn test_parse_custom_config() {
        let toml = r#"
preset = "eslint"
quiet = true

[ui]
color = false
"#;
        let config = parse_config(toml).unwrap();
        assert_eq!(config.preset.as_deref(), Some("eslint"));
        assert_eq!(config.quiet, Some(true));
        assert!(!config.ui.color);
    }

    #[test]
    fn test_parse_invalid_config() {
        let err = parse_config("preset = [").unwrap_err();
        assert!(matches!(err, VcmError::Config(ConfigError::ParseError { .. })));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_config_from(Path::new("/definitely/not/here/vcm.toml")).unwrap_err();
        assert!(matches!(err, VcmError::Config(ConfigError::NotFound { .. })));
    }

    #[test]
    fn test_find_config_in_parent_directory() {
        let root = tempfile::tempdir().unwrap();
        let nested = root.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(root.path().join(".vcm.toml"), "preset = \"atom\"\n").unwrap();

        let found = find_config_file_from(&nested).unwrap();
        assert_eq!(found, root.path().join(".vcm.toml"));

        let config = load_config_from(&found).unwrap();
        assert_eq!(config.preset.as_deref(), Some("atom"));
    }
}
