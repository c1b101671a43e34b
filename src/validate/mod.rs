// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Validation entry points.
//!
//! The dispatcher trims the message, resolves the preset, honours the
//! preset's ignore pattern and finally runs its checks. An unknown preset
//! is returned as an error; a rejected message is `Ok(false)`.

use std::path::Path;

use crate::config::quiet_from_env;
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::error::Result;
use crate::presets::Preset;

/// Preset used when the options do not name one.
pub const DEFAULT_PRESET: &str = "angular";

/// Notice emitted when an ignore pattern short-circuits validation.
pub const IGNORED_NOTICE: &str = "Commit message validation ignored.";

/// Per-call validation options. Unset fields fall back to defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidateOptions {
    /// Preset name, `angular` when unset.
    pub preset: Option<String>,
    /// Suppress the ignored notice, derived from `SILENT` when unset.
    pub quiet: Option<bool>,
}

impl ValidateOptions {
    /// Create options with every field defaulted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the preset name.
    pub fn with_preset(mut self, preset: impl Into<String>) -> Self {
        self.preset = Some(preset.into());
        self
    }

    /// Set the quiet flag.
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = Some(quiet);
        self
    }

    /// The effective preset name.
    pub fn preset_name(&self) -> &str {
        self.preset.as_deref().unwrap_or(DEFAULT_PRESET)
    }

    /// The effective quiet flag.
    pub fn is_quiet(&self) -> bool {
        self.quiet.unwrap_or_else(quiet_from_env)
    }
}

/// Validate a commit message.
pub fn validate_message(
    message: &str,
    options: &ValidateOptions,
    sink: &mut dyn DiagnosticSink,
) -> Result<bool> {
    if message.is_empty() {
        tracing::debug!("Empty commit message");
        return Ok(false);
    }

    let message = message.trim();
    let preset = Preset::resolve(options.preset_name())?;
    tracing::debug!("Validating with preset '{}'", preset);

    if preset.ignores(message) {
        tracing::debug!("Ignore pattern of '{}' matched", preset);
        if !options.is_quiet() {
            sink.emit(Diagnostic::info(IGNORED_NOTICE));
        }
        return Ok(true);
    }

    Ok(preset.validate(message, sink))
}

/// Validate a commit message held in a raw buffer.
///
/// Invalid UTF-8 sequences are replaced rather than rejected.
pub fn validate_from_source(
    buffer: &[u8],
    options: &ValidateOptions,
    sink: &mut dyn DiagnosticSink,
) -> Result<bool> {
    let message = String::from_utf8_lossy(buffer);
    validate_message(&message, options, sink)
}

/// Validate a commit message file, e.g. the argument of a `commit-msg` hook.
pub fn validate_message_from_file(
    path: impl AsRef<Path>,
    options: &ValidateOptions,
    sink: &mut dyn DiagnosticSink,
) -> Result<bool> {
    let path = path.as_ref();
    tracing::debug!("Reading commit message from {:?}", path);

    let buffer = std::fs::read(path)?;
    validate_from_source(&buffer, options, sink)
}
