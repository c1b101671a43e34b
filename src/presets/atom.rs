// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Atom convention: one emoji code, a space, then the subject.

use lazy_static::lazy_static;
use regex::Regex;

use super::{check_length, Check, LengthLimit, Violation};

pub(super) const LIMIT: LengthLimit = LengthLimit::AtMost(72);

pub(super) const EMOJIS: &[&str] = &[
    ":art:",
    ":racehorse:",
    ":non-potable_water:",
    ":memo:",
    ":penguin:",
    ":apple:",
    ":checkered_flag:",
    ":bug:",
    ":fire:",
    ":green_heart:",
    ":white_check_mark:",
    ":lock:",
    ":arrow_up:",
    ":arrow_down:",
    ":shirt:",
];

lazy_static! {
    static ref PATTERN: Regex = {
        let codes = EMOJIS
            .iter()
            .map(|emoji| regex::escape(emoji))
            .collect::<Vec<_>>()
            .join("|");
        Regex::new(&format!("^(?:{}) .*$", codes)).unwrap()
    };
}

pub(super) fn check(message: &str) -> Check {
    check_length(message, LIMIT)?;

    if PATTERN.is_match(message) {
        Ok(())
    } else {
        Err(Violation::new(format!(
            "Message does not match \"<emoji> <subject>\"! was: {}",
            message
        ))
        .with_hint(format!("Valid emojis are: {}", EMOJIS.join(", "))))
    }
}
