// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Ember convention: `[TAG argument] subject`.
//!
//! The argument depends on the tag: a release channel for documentation,
//! bug fixes and cleanups, a feature flag name for features, and a CVE id
//! for security fixes. Only the subject line is checked.

use lazy_static::lazy_static;
use regex::Regex;

use super::{check_length, check_vocabulary, subject_line, Check, LengthLimit, Violation};

pub(super) const LIMIT: LengthLimit = LengthLimit::AtMost(100);

pub(super) const TAGS: &[&str] = &["DOC", "BUGFIX", "CLEANUP", "FEATURE", "SECURITY"];

pub(super) const CHANNELS: &[&str] = &["release", "beta", "canary", "lts"];

lazy_static! {
    static ref PATTERN: Regex =
        Regex::new(r"^\[(?P<tag>[A-Za-z]+) (?P<argument>[^\]]+)\] (?P<subject>\S.*)$").unwrap();
    static ref FEATURE_FLAG: Regex = Regex::new(r"^[a-z0-9-]+$").unwrap();
    static ref CVE: Regex = Regex::new(r"^CVE-[0-9]+-[0-9]+$").unwrap();
}

pub(super) fn check(message: &str) -> Check {
    let subject = subject_line(message);
    check_length(subject, LIMIT)?;

    let captures = PATTERN.captures(subject).ok_or_else(|| {
        Violation::new(format!(
            "Message does not match \"[<TAG> <argument>] <subject>\"! was: {}",
            subject
        ))
    })?;

    let tag = captures.name("tag").map(|m| m.as_str()).unwrap_or("");
    let argument = captures.name("argument").map(|m| m.as_str()).unwrap_or("");

    check_vocabulary(tag, TAGS, "tag")?;
    check_argument(tag, argument)
}

fn check_argument(tag: &str, argument: &str) -> Check {
    match tag {
        "FEATURE" if FEATURE_FLAG.is_match(argument) => Ok(()),
        "FEATURE" => Err(Violation::new(format!(
            "'{}' is not a valid feature flag name!",
            argument
        ))
        .with_hint("Feature flags are lowercase words separated by dashes")),
        "SECURITY" if CVE.is_match(argument) => Ok(()),
        "SECURITY" => Err(Violation::new(format!("'{}' is not a CVE identifier!", argument))
            .with_hint("Security fixes reference a CVE, e.g. CVE-2024-1234")),
        _ => check_vocabulary(argument, CHANNELS, "channel"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrong_format() {
        assert!(check("(DOCS canary) Update docs").is_err());
        assert!(check("[FEATUR add a thing] Amazing new feature").is_err());
        assert!(check("[DOC notachannel] Update docs").is_err());
        assert!(check("[DOC beta]").is_err());
    }

    #[test]
    fn test_valid_messages() {
        assert!(check("[DOC beta] Update CONTRIBUTING.md for commit prefixes").is_ok());
        assert!(check("[FEATURE query-params-new] Message").is_ok());
        assert!(check("[BUGFIX beta] Message").is_ok());
        assert!(check("[BUGFIX lts] Message").is_ok());
        assert!(check("[CLEANUP canary] Remove old code").is_ok());
        assert!(check("[SECURITY CVE-111-1111] Message").is_ok());
    }

    #[test]
    fn test_multiline() {
        let message = "
        [DOC beta] Update CONTRIBUTING.md for commit prefixes

        Fixes #3180
      ";
        assert!(check(message).is_ok());
    }

    #[test]
    fn test_unknown_channel_lists_channels() {
        let violation = check("[DOC notachannel] Update docs").unwrap_err();
        assert_eq!(
            violation.diagnostics()[0].text,
            "'notachannel' is not an allowed channel!"
        );
        assert_eq!(
            violation.diagnostics()[1].text,
            "Valid channels are: release, beta, canary, lts"
        );
    }

    #[test]
    fn test_tag_checked_before_argument() {
        let violation = check("[FEATUR add a thing] Amazing new feature").unwrap_err();
        assert_eq!(violation.diagnostics()[0].text, "'FEATUR' is not an allowed tag!");
    }

    #[test]
    fn test_bad_arguments() {
        assert!(check("[FEATURE Query Params] Message").is_err());
        assert!(check("[SECURITY 2024-1] Message").is_err());
    }
}
