//! Lexical rules shared by the parser and the typed value writers.
//!
//! These are pure functions over `&str`. They decide what counts as a legal
//! key or section name, what a well-formed quoted string or numeric token
//! looks like, and where a trailing comment starts.

use crate::{Error, Result};

/// Characters that open a trailing comment.
pub const COMMENT_MARKERS: [char; 2] = ['#', ';'];

/// Characters that open a quoted string value.
pub const QUOTE_CHARS: [char; 2] = ['"', '\''];

/// A value split into its raw token and its optional trailing comment.
///
/// Only lives between lexing a value and building the [`Item`](crate::Item) from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ParsedValue<'a> {
    pub value: &'a str,
    pub comment: Option<&'a str>,
}

/// Returns `true` if `s` is non-empty and made only of ASCII letters.
///
/// # Examples
///
/// ```rust
/// use strict_ini::lexical::is_alphabetic;
///
/// assert!(is_alphabetic("alpha"));
/// assert!(!is_alphabetic("a1"));
/// assert!(!is_alphabetic(""));
/// ```
#[inline]
#[must_use]
pub fn is_alphabetic(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_alphabetic())
}

/// Returns `true` if every character of `s` is whitespace (vacuously true for `""`).
#[inline]
#[must_use]
pub fn is_blank(s: &str) -> bool {
    s.chars().all(char::is_whitespace)
}

/// Removes leading and trailing whitespace.
#[inline]
#[must_use]
pub fn strip_outer_whitespace(s: &str) -> &str {
    s.trim()
}

/// Splits the trailing comment off the text that follows a complete token.
///
/// Everything before the first comment marker must be blank. Returns the
/// comment including its marker, or `None` when there is no marker.
///
/// # Errors
///
/// Returns a syntax error if non-blank text precedes the marker (or, with no
/// marker, if the tail is not blank at all).
///
/// # Examples
///
/// ```rust
/// use strict_ini::lexical::verify_and_split_comment;
///
/// assert_eq!(verify_and_split_comment("  # note").unwrap(), Some("# note"));
/// assert_eq!(verify_and_split_comment("   ").unwrap(), None);
/// assert!(verify_and_split_comment(" oops ; note").is_err());
/// ```
pub fn verify_and_split_comment(tail: &str) -> Result<Option<&str>> {
    let (padding, comment) = match tail.find(COMMENT_MARKERS) {
        Some(idx) => (&tail[..idx], Some(&tail[idx..])),
        None => (tail, None),
    };

    if !is_blank(padding) {
        return Err(Error::syntax(
            "unexpected characters after value; use '#' or ';' to start a comment",
        ));
    }

    Ok(comment)
}

/// Lexes a value that starts with a quote character.
///
/// The value runs up to and including the next occurrence of the opening
/// quote; whatever follows must be a (possibly empty) trailing comment.
pub(crate) fn parse_quoted(value: &str) -> Result<ParsedValue<'_>> {
    let quote = match value.chars().next() {
        Some(q) if QUOTE_CHARS.contains(&q) => q,
        _ => return Err(Error::syntax("expected a quoted string")),
    };

    let close = value[1..]
        .find(quote)
        .map(|idx| idx + 1)
        .ok_or_else(|| Error::syntax("unterminated string"))?;

    if close == value.len() - 1 {
        return Ok(ParsedValue {
            value,
            comment: None,
        });
    }

    let comment = verify_and_split_comment(&value[close + 1..])?;
    Ok(ParsedValue {
        value: &value[..=close],
        comment,
    })
}

/// Lexes a value that does not start with a quote character.
///
/// The token ends at the first `#`, `;` or space; the remainder must be a
/// (possibly empty) trailing comment. The token itself must be a number.
pub(crate) fn parse_number(value: &str) -> Result<ParsedValue<'_>> {
    let (token, comment) = match value.find(|c: char| c == ' ' || COMMENT_MARKERS.contains(&c)) {
        Some(idx) => (&value[..idx], verify_and_split_comment(&value[idx..])?),
        None => (value, None),
    };

    if token.is_empty() {
        return Err(Error::syntax("missing value after '='"));
    }

    validate_number(token)?;
    Ok(ParsedValue {
        value: token,
        comment,
    })
}

/// Checks that `token` is made of ASCII digits with at most one `.`, and is not just `.`.
///
/// # Errors
///
/// Returns a value error describing the malformed token.
///
/// # Examples
///
/// ```rust
/// use strict_ini::lexical::validate_number;
///
/// assert!(validate_number("3.14").is_ok());
/// assert!(validate_number("3.1.4").is_err());
/// assert!(validate_number(".").is_err());
/// assert!(validate_number("12a").is_err());
/// ```
pub fn validate_number(token: &str) -> Result<()> {
    if token.is_empty() || token == "." {
        return Err(Error::value(token, "wrong number"));
    }

    let mut dots = 0;
    for b in token.bytes() {
        match b {
            b'0'..=b'9' => {}
            b'.' => {
                dots += 1;
                if dots > 1 {
                    return Err(Error::value(token, "number contains more than one '.'"));
                }
            }
            _ => return Err(Error::value(token, "number must contain only digits")),
        }
    }

    Ok(())
}

/// Returns `true` if `raw` is a quoted string token (starts with a quote character).
#[inline]
#[must_use]
pub fn is_quoted(raw: &str) -> bool {
    raw.starts_with(QUOTE_CHARS)
}
