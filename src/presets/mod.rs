// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Preset registry.
//!
//! Each preset models the commit convention of one project. A preset is a
//! fixed, ordered chain of checks (length, then structure, then
//! vocabulary) where the first failing check decides the outcome, plus an
//! optional ignore pattern that lets a message skip validation entirely.

mod angular;
mod atom;
mod ember;
mod eslint;
mod jquery;

use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::error::{ConfigError, Result};

/// Why a message was rejected: the diagnostics of the first failing check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    diagnostics: Vec<Diagnostic>,
}

impl Violation {
    /// Create a violation from its primary error line.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            diagnostics: vec![Diagnostic::error(text)],
        }
    }

    /// Attach an informational hint, e.g. the list of accepted tokens.
    pub fn with_hint(mut self, text: impl Into<String>) -> Self {
        self.diagnostics.push(Diagnostic::info(text));
        self
    }

    /// Diagnostics in emission order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Consume the violation, yielding its diagnostics.
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

/// Outcome of a single check. `Ok` means continue with the next one.
pub type Check = std::result::Result<(), Violation>;

/// Maximum message length accepted by a preset, in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthLimit {
    /// Length must be strictly below the value.
    Below(usize),
    /// Length may equal the value.
    AtMost(usize),
}

impl LengthLimit {
    /// Check whether a length is within the limit.
    pub fn allows(&self, len: usize) -> bool {
        match *self {
            LengthLimit::Below(max) => len < max,
            LengthLimit::AtMost(max) => len <= max,
        }
    }

    /// The configured bound.
    pub fn value(&self) -> usize {
        match *self {
            LengthLimit::Below(max) | LengthLimit::AtMost(max) => max,
        }
    }
}

impl std::fmt::Display for LengthLimit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LengthLimit::Below(max) => write!(f, "< {}", max),
            LengthLimit::AtMost(max) => write!(f, "<= {}", max),
        }
    }
}

/// A registered preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    Angular,
    Atom,
    Eslint,
    Ember,
    Jquery,
}

impl Preset {
    /// Every registered preset.
    pub const ALL: &'static [Preset] = &[
        Preset::Angular,
        Preset::Atom,
        Preset::Eslint,
        Preset::Ember,
        Preset::Jquery,
    ];

    /// Look up a preset by its exact, case-sensitive name.
    pub fn resolve(name: &str) -> Result<Self> {
        Ok(name.parse::<Preset>()?)
    }

    /// Get the registry key of the preset.
    pub fn name(&self) -> &'static str {
        match self {
            Preset::Angular => "angular",
            Preset::Atom => "atom",
            Preset::Eslint => "eslint",
            Preset::Ember => "ember",
            Preset::Jquery => "jquery",
        }
    }

    /// Get a description of the expected format.
    pub fn description(&self) -> &'static str {
        match self {
            Preset::Angular => "<type>(<scope>): <subject>",
            Preset::Atom => ":<emoji>: <subject>",
            Preset::Eslint => "<Tag>: <Summary> (fixes #<issue>)",
            Preset::Ember => "[<TAG> <channel|flag|CVE>] <subject>",
            Preset::Jquery => "<Component>: <Short Description>",
        }
    }

    /// Length limit, applied to the whole message or to its subject line
    /// depending on the preset.
    pub fn length_limit(&self) -> LengthLimit {
        match self {
            Preset::Angular => angular::LIMIT,
            Preset::Atom => atom::LIMIT,
            Preset::Eslint => eslint::LIMIT,
            Preset::Ember => ember::LIMIT,
            Preset::Jquery => jquery::LIMIT,
        }
    }

    /// Whether the preset has an ignore pattern at all.
    pub fn has_ignore_pattern(&self) -> bool {
        matches!(self, Preset::Angular | Preset::Eslint)
    }

    /// Whether the message should bypass validation.
    pub fn ignores(&self, message: &str) -> bool {
        match self {
            Preset::Angular => angular::ignores(message),
            Preset::Eslint => eslint::ignores(message),
            Preset::Atom | Preset::Ember | Preset::Jquery => false,
        }
    }

    /// Run the preset's checks in order, stopping at the first failure.
    pub fn check(&self, message: &str) -> Check {
        match self {
            Preset::Angular => angular::check(message),
            Preset::Atom => atom::check(message),
            Preset::Eslint => eslint::check(message),
            Preset::Ember => ember::check(message),
            Preset::Jquery => jquery::check(message),
        }
    }

    /// Run the checks and forward any failure diagnostics to the sink.
    pub fn validate(&self, message: &str, sink: &mut dyn DiagnosticSink) -> bool {
        match self.check(message) {
            Ok(()) => true,
            Err(violation) => {
                for diagnostic in violation.into_diagnostics() {
                    sink.emit(diagnostic);
                }
                false
            }
        }
    }
}

impl std::str::FromStr for Preset {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Preset::ALL
            .iter()
            .copied()
            .find(|preset| preset.name() == s)
            .ok_or_else(|| ConfigError::UnknownPreset {
                name: s.to_string(),
            })
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// First line of the trimmed message, for presets that ignore the body.
pub(crate) fn subject_line(message: &str) -> &str {
    message.trim().lines().next().unwrap_or("").trim_end()
}

/// Reject text whose character count exceeds the limit.
pub(crate) fn check_length(text: &str, limit: LengthLimit) -> Check {
    if limit.allows(text.chars().count()) {
        Ok(())
    } else {
        Err(Violation::new(format!(
            "Message is longer than {} characters!",
            limit.value()
        )))
    }
}

/// Reject a token that is not part of a closed vocabulary.
pub(crate) fn check_vocabulary(token: &str, allowed: &[&str], kind: &str) -> Check {
    if allowed.contains(&token) {
        Ok(())
    } else {
        Err(
            Violation::new(format!("'{}' is not an allowed {}!", token, kind))
                .with_hint(format!("Valid {}s are: {}", kind, allowed.join(", "))),
        )
    }
}
