// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! jQuery convention: `Component: Short Description`.
//!
//! Components are module names of the project, so only their shape is
//! checked. A body is allowed but must be separated by a blank line.

use lazy_static::lazy_static;
use regex::Regex;

use super::{check_length, subject_line, Check, LengthLimit, Violation};

pub(super) const LIMIT: LengthLimit = LengthLimit::AtMost(72);

lazy_static! {
    static ref PATTERN: Regex =
        Regex::new(r"^(?P<component>[A-Za-z][A-Za-z0-9_./-]*): (?P<description>\S.*)$").unwrap();
}

pub(super) fn check(message: &str) -> Check {
    let subject = subject_line(message);
    check_length(subject, LIMIT)?;

    if !PATTERN.is_match(subject) {
        return Err(Violation::new(format!(
            "Message does not match \"<Component>: <Short Description>\"! was: {}",
            subject
        )));
    }

    if subject.ends_with('.') {
        return Err(Violation::new(
            "Short description must not end with a period!",
        ));
    }

    match message.trim().lines().nth(1) {
        Some(line) if !line.trim().is_empty() => Err(Violation::new(
            "The subject line must be followed by a blank line!",
        )),
        _ => Ok(()),
    }
}
