//! Line normalizer - strips list numbering from a raw line
//!
//! This module contains pure string handling with no I/O dependencies.

use std::sync::LazyLock;

use regex::Regex;

/// Leading blanks, ASCII digits, one optional `.` `)` `-`, trailing blanks
///
/// A blank is any whitespace or a byte order mark.
static ORDINAL_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\s\x{FEFF}]*[0-9]+[.)\-]?[\s\x{FEFF}]*").expect("ordinal prefix regex is valid")
});

/// Whitespace or a byte order mark (U+FEFF)
fn is_blank(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

/// Normalize one raw line into a candidate code
///
/// Removes an optional numeric prefix such as `1.`, `2)`, `3-` or a bare
/// `4 `, then trims surrounding whitespace. Every leading digit belongs to
/// the prefix, so a line made only of digits normalizes to an empty string.
/// A byte order mark, as left at the start of files saved by some editors,
/// counts as whitespace.
///
/// # Examples
///
/// ```
/// use codesift::core::services::normalize_line;
///
/// assert_eq!(normalize_line("  12) ABCdef  "), "ABCdef");
/// assert_eq!(normalize_line("42"), "");
/// ```
#[must_use]
pub fn normalize_line(line: &str) -> &str {
    let rest = ORDINAL_PREFIX.find(line).map_or(line, |m| &line[m.end()..]);
    rest.trim_matches(is_blank)
}
