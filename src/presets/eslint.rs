// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! ESLint convention: `Tag: Summary (fixes #123)`.
//!
//! Only the subject line is checked. Issue references may appear solely in
//! one trailing parenthesised group, comma separated.

use lazy_static::lazy_static;
use regex::Regex;

use super::{check_length, check_vocabulary, subject_line, Check, LengthLimit, Violation};

pub(super) const LIMIT: LengthLimit = LengthLimit::AtMost(72);

pub(super) const TAGS: &[&str] = &[
    "Fix", "Update", "New", "Breaking", "Docs", "Build", "Upgrade", "Chore",
];

const ISSUE: &str = r"(?:#[0-9]+|(?:gh|GH)-[0-9]+|[A-Za-z0-9_.-]+/[A-Za-z0-9_.-]+#[0-9]+)";

lazy_static! {
    static ref PATTERN: Regex = Regex::new(&format!(
        r"^(?:fixup!\s*)?(?P<tag>[A-Za-z]+): (?P<summary>[A-Z0-9].*?)(?: \((?:refs|fixes) {issue}(?:, (?:refs|fixes) {issue})*\))?$",
        issue = ISSUE
    ))
    .unwrap();
    static ref ISSUE_REFERENCE: Regex = Regex::new(r"#[0-9]+|\b(?:gh|GH)-[0-9]+").unwrap();
    static ref IGNORE_PATTERN: Regex = Regex::new(r"^(?:WIP:|fixup!)").unwrap();
}

pub(super) fn ignores(message: &str) -> bool {
    IGNORE_PATTERN.is_match(message)
}

pub(super) fn check(message: &str) -> Check {
    let subject = subject_line(message);
    check_length(subject, LIMIT)?;

    let captures = PATTERN.captures(subject).ok_or_else(|| {
        Violation::new(format!(
            "Message does not match \"<Tag>: <Summary> (fixes #<issue>)\"! was: {}",
            subject
        ))
    })?;

    let summary = captures.name("summary").map(|m| m.as_str()).unwrap_or("");
    if ISSUE_REFERENCE.is_match(summary) {
        return Err(Violation::new(format!(
            "Issue references belong in one trailing group like \"(fixes #123, refs #456)\"! was: {}",
            subject
        )));
    }

    let tag = captures.name("tag").map(|m| m.as_str()).unwrap_or("");
    check_vocabulary(tag, TAGS, "tag")
}
