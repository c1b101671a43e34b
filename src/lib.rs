// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! vcm - Validate commit messages against project conventions
//!
//! Checks a commit message against one of a fixed set of presets, each
//! modelling the convention of a real project.
//!
//! # Presets
//!
//! - **angular**: `<type>(<scope>): <subject>`, `WIP:` messages are skipped
//! - **atom**: `:<emoji>: <subject>`
//! - **eslint**: `Tag: Summary (fixes #123)`, `WIP:`/`fixup!` are skipped
//! - **ember**: `[TAG channel] subject`
//! - **jquery**: `Component: Short Description`
//!
//! # Example
//!
//! ```
//! use vcm::diagnostics::Diagnostic;
//! use vcm::validate::{validate_message, ValidateOptions};
//!
//! let mut diagnostics: Vec<Diagnostic> = Vec::new();
//! let options = ValidateOptions::new().with_preset("atom");
//!
//! let valid = validate_message(":art: make it pretty", &options, &mut diagnostics).unwrap();
//! assert!(valid);
//! assert!(diagnostics.is_empty());
//! ```

// Module declarations
pub mod cli;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod presets;
pub mod validate;

// Re-exports for convenience
pub use config::VcmConfig;
pub use diagnostics::{Diagnostic, DiagnosticSink, Severity};
pub use error::{Result, VcmError};
pub use presets::Preset;
pub use validate::{validate_from_source, validate_message, validate_message_from_file, ValidateOptions};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of vcm.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }
}
