// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for vcm.
//!
//! A rejected commit message is not an error for the library: the
//! dispatcher reports it as `Ok(false)`. Errors are reserved for things
//! the caller has to fix (an unknown preset, an unreadable file).

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for vcm operations.
#[derive(Error, Debug)]
pub enum VcmError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl VcmError {
    /// Process exit code for this error.
    ///
    /// A rejected message exits with 1 so hooks can tell it apart from a
    /// broken setup, which exits with 2.
    pub fn exit_code(&self) -> i32 {
        match self {
            VcmError::Validation(_) => 1,
            VcmError::Config(_) | VcmError::Io(_) => 2,
        }
    }
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Preset '{name}' does not exist. A preset must be provided")]
    UnknownPreset { name: String },

    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Configuration file already exists: {path}. Use --force to overwrite")]
    AlreadyExists { path: PathBuf },
}

/// Validation-related errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Commit message does not follow the '{preset}' preset")]
    Rejected { preset: String },
}

/// Result type alias for vcm operations.
pub type Result<T> = std::result::Result<T, VcmError>;
