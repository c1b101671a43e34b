// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Diagnostic side channel.
//!
//! Presets explain a rejection by emitting [`Diagnostic`] values into a
//! [`DiagnosticSink`]. The core never prints anything itself; the CLI
//! plugs in a [`ConsoleSink`], tests and JSON output collect into a
//! `Vec<Diagnostic>`.

use console::{style, StyledObject};
use serde::Serialize;

/// Severity of a diagnostic line. Only used to pick display styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warn,
    Info,
    Debug,
}

impl Severity {
    /// Get the string representation of the severity.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warn => "warn",
            Severity::Info => "info",
            Severity::Debug => "debug",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single line of diagnostic output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Human-readable text.
    pub text: String,
    /// Severity used for styling.
    pub severity: Severity,
}

impl Diagnostic {
    /// Create a new diagnostic.
    pub fn new(text: impl Into<String>, severity: Severity) -> Self {
        Self {
            text: text.into(),
            severity,
        }
    }

    /// Create an error diagnostic.
    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, Severity::Error)
    }

    /// Create a warning diagnostic.
    pub fn warn(text: impl Into<String>) -> Self {
        Self::new(text, Severity::Warn)
    }

    /// Create an informational diagnostic.
    pub fn info(text: impl Into<String>) -> Self {
        Self::new(text, Severity::Info)
    }

    /// Create a debug diagnostic.
    pub fn debug(text: impl Into<String>) -> Self {
        Self::new(text, Severity::Debug)
    }

    /// Format the diagnostic for terminal output.
    pub fn format(&self) -> String {
        self.styled().to_string()
    }

    fn styled(&self) -> StyledObject<&str> {
        let text = style(self.text.as_str()).for_stderr();
        match self.severity {
            Severity::Error => text.red(),
            Severity::Warn => text.yellow(),
            Severity::Info => text.cyan(),
            Severity::Debug => text.white(),
        }
    }
}

/// Receiver for diagnostics emitted during validation.
pub trait DiagnosticSink {
    /// Accept one diagnostic line.
    fn emit(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Sink that prints colored diagnostics to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl DiagnosticSink for ConsoleSink {
    fn emit(&mut self, diagnostic: Diagnostic) {
        eprintln!("{}", diagnostic.format());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_sink_collects_in_order() {
        let mut sink: Vec<Diagnostic> = Vec::new();
        sink.emit(Diagnostic::error("first"));
        sink.emit(Diagnostic::info("second"));

        assert_eq!(sink.len(), 2);
        assert_eq!(sink[0].severity, Severity::Error);
        assert_eq!(sink[1].text, "second");
    }

    #[test]
    fn test_format_keeps_text() {
        console::set_colors_enabled_stderr(false);
        let diagnostic = Diagnostic::warn("Test message");
        assert_eq!(diagnostic.format(), "Test message");
    }

    #[test]
    fn test_severity_serialization() {
        let json = serde_json::to_string(&Diagnostic::debug("x")).unwrap();
        assert_eq!(json, r#"{"text":"x","severity":"debug"}"#);
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(Severity::Error.to_string(), "error");
        assert_eq!(Severity::Info.to_string(), "info");
    }
}
