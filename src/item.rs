//! A single `key=value` entry with an optional trailing comment.

use crate::lexical::{is_alphabetic, COMMENT_MARKERS};
use crate::value::{FromRaw, ToRaw, Value};
use crate::{Error, Result};
use std::fmt;

/// A key, its raw value and an optional trailing comment.
///
/// The key is fixed at creation; the value and comment can be rewritten in
/// place. Values are stored in raw form (quotes included for strings) and
/// converted on access with [`Item::get`].
///
/// # Examples
///
/// ```rust
/// use strict_ini::from_str;
///
/// let mut ini = from_str("[server]\nport = 8080 ; http").unwrap();
/// let item = ini.section_mut("server").unwrap().item_mut("port").unwrap();
///
/// assert_eq!(item.get::<u16>().unwrap(), 8080);
/// assert_eq!(item.comment(), Some("; http"));
///
/// item.set(9090).unwrap();
/// assert_eq!(item.to_string(), "port=9090 ; http");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    key: String,
    raw: String,
    comment: Option<String>,
}

impl Item {
    /// Creates an item from a typed value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Key`] if `key` is not made only of ASCII letters, or
    /// [`Error::Value`] if `value` cannot be rendered parseably.
    pub fn new<T: ToRaw>(key: &str, value: T) -> Result<Self> {
        check_key(key)?;
        Ok(Item {
            key: key.to_string(),
            raw: value.to_raw()?,
            comment: None,
        })
    }

    /// Builds an item from text the lexer has already validated.
    pub(crate) fn from_parts(key: &str, raw: &str, comment: Option<&str>) -> Self {
        Item {
            key: key.to_string(),
            raw: raw.to_string(),
            comment: comment.map(str::to_string),
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The value exactly as it is written out, quotes included for strings.
    #[must_use]
    pub fn raw_value(&self) -> &str {
        &self.raw
    }

    /// The trailing comment, starting with its `#` or `;` marker.
    #[must_use]
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Reads the value as `T`.
    ///
    /// Strings come back without their surrounding quotes; numeric types are
    /// parsed from the raw token.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCast`] if the raw value cannot be read as `T`.
    pub fn get<T: FromRaw>(&self) -> Result<T> {
        T::from_raw(&self.raw)
    }

    /// Returns the dynamically-typed view of the value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCast`] if a numeric token does not fit the
    /// integer or float range.
    pub fn value(&self) -> Result<Value> {
        Value::from_raw(&self.raw)
    }

    /// Replaces the value; strings are re-wrapped in quotes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Value`] if `value` cannot be rendered parseably; the
    /// item is left unchanged in that case.
    pub fn set<T: ToRaw>(&mut self, value: T) -> Result<()> {
        self.raw = value.to_raw()?;
        Ok(())
    }

    /// Replaces or removes the trailing comment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Syntax`] if the comment does not start with `#` or `;`,
    /// spans several lines, contains `=` or ends in whitespace.
    pub fn set_comment(&mut self, comment: Option<&str>) -> Result<()> {
        if let Some(text) = comment {
            check_item_comment(text)?;
        }
        self.comment = comment.map(str::to_string);
        Ok(())
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.raw)?;
        if let Some(comment) = &self.comment {
            write!(f, " {}", comment)?;
        }
        Ok(())
    }
}

/// Validates an item key.
pub(crate) fn check_key(key: &str) -> Result<()> {
    if is_alphabetic(key) {
        Ok(())
    } else {
        Err(Error::key(key, "key must contain only ASCII letters"))
    }
}

/// Validates a comment set through the API.
pub(crate) fn check_comment(comment: &str) -> Result<()> {
    if !comment.starts_with(COMMENT_MARKERS) {
        return Err(Error::syntax("comment must start with '#' or ';'"));
    }
    if comment.contains(['\n', '\r']) {
        return Err(Error::syntax("comment cannot span several lines"));
    }
    Ok(())
}

/// Validates a trailing item comment, which shares its line with `key=value`.
fn check_item_comment(comment: &str) -> Result<()> {
    check_comment(comment)?;
    if comment.contains('=') {
        return Err(Error::syntax("item comment cannot contain '='"));
    }
    if comment.trim_end() != comment {
        return Err(Error::syntax("item comment cannot end in whitespace"));
    }
    Ok(())
}
