// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Angular convention: `<type>(<scope>): <subject>`.
//!
//! Matched against the whole message, so a message carrying a body does
//! not match.

use lazy_static::lazy_static;
use regex::Regex;

use super::{check_length, check_vocabulary, Check, LengthLimit, Violation};

pub(super) const LIMIT: LengthLimit = LengthLimit::Below(100);

pub(super) const TYPES: &[&str] = &[
    "feat", "fix", "docs", "style", "refactor", "perf", "test", "chore", "revert",
];

lazy_static! {
    static ref PATTERN: Regex =
        Regex::new(r"^(?:fixup!\s*)?(?P<type>[A-Za-z0-9_]*)(?:\((?P<scope>[A-Za-z0-9_$.*/-]*)\))?: (?P<subject>.*)$")
            .unwrap();
    static ref IGNORE_PATTERN: Regex = Regex::new(r"^WIP:").unwrap();
}

pub(super) fn ignores(message: &str) -> bool {
    IGNORE_PATTERN.is_match(message)
}

pub(super) fn check(message: &str) -> Check {
    check_length(message, LIMIT)?;

    let captures = PATTERN.captures(message).ok_or_else(|| {
        Violation::new(format!(
            "Message does not match \"<type>(<scope>): <subject>\"! was: {}",
            message
        ))
    })?;

    let commit_type = captures.name("type").map(|m| m.as_str()).unwrap_or("");
    check_vocabulary(commit_type, TYPES, "type")
}
