//! Heading line recognition.
//!
//! A heading opts into the table of contents by closing with a second `#`
//! followed by an anchor identifier, for example `## Install # install`.
//! Lines that start with `#` but carry no closing marker, or whose
//! identifier is not anchor-safe, are ordinary text and pass through
//! untouched.

use std::sync::LazyLock;

use regex::Regex;

/// The character that opens and closes a heading line.
pub const MARKER: char = '#';

static IDENTIFIER_RE: LazyLock<Regex> =
    lazy_regex!(r"^[\p{L}\p{Nd}_-]*$", "identifier regex should compile");

/// A line that looks like a heading, before its identifier is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadingCandidate<'a> {
    /// Number of leading markers. Not clamped.
    pub level: usize,
    pub title: &'a str,
    pub identifier: &'a str,
}

/// Classify a single line (terminator included).
///
/// Returns `None` when the line does not start with a marker or has no
/// closing marker after the leading run.
///
/// # Examples
///
/// ```
/// use mdtoc::headings::classify_line;
/// let heading = classify_line("## Install # install\n").unwrap();
/// assert_eq!((heading.level, heading.title, heading.identifier), (2, "Install", "install"));
/// assert!(classify_line("#hashtag\n").is_none());
/// ```
#[must_use]
pub fn classify_line(line: &str) -> Option<HeadingCandidate<'_>> {
    let rest = line.trim_start_matches(MARKER);
    let level = line.len() - rest.len();
    if level == 0 {
        return None;
    }
    let (title, identifier) = rest.split_once(MARKER)?;
    Some(HeadingCandidate {
        level,
        title: title.trim(),
        identifier: identifier.trim(),
    })
}

/// Whether `identifier` is safe to use as an anchor.
///
/// Only Unicode letters, decimal digits, `_` and `-` are allowed. The empty
/// identifier passes.
#[must_use]
pub fn is_valid_identifier(identifier: &str) -> bool {
    IDENTIFIER_RE.is_match(identifier)
}
