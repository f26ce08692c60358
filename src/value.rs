//! Typed views of raw INI values.
//!
//! An [`Item`](crate::Item) stores its value exactly as written (the *raw*
//! value): quoted strings keep their quotes, numbers are kept as the digits
//! that appeared in the file. Conversion to Rust types happens on demand:
//!
//! - [`FromRaw`] reads a raw value as a Rust type, failing with
//!   [`Error::InvalidCast`] if the text does not parse as that type
//! - [`ToRaw`] renders a Rust value as raw text, failing with
//!   [`Error::Value`] if the result could not be parsed back
//! - [`Value`] is a dynamically-typed view: string, integer or float
//!
//! ## Examples
//!
//! ```rust
//! use strict_ini::{FromRaw, ToRaw, Value};
//!
//! assert_eq!(u16::from_raw("8080").unwrap(), 8080);
//! assert_eq!(String::from_raw("\"localhost\"").unwrap(), "localhost");
//! assert!(i32::from_raw("3.14").is_err());
//!
//! assert_eq!("localhost".to_raw().unwrap(), "\"localhost\"");
//! assert_eq!(2.5f64.to_raw().unwrap(), "2.5");
//! assert!((-1i32).to_raw().is_err());
//!
//! assert_eq!(Value::from_raw("42").unwrap(), Value::Integer(42));
//! ```

use crate::lexical::{is_quoted, validate_number};
use crate::{Error, Result};
use serde::{Serialize, Serializer};
use std::fmt;

/// Reads a raw INI value as a concrete type.
pub trait FromRaw: Sized {
    /// Parses `raw`, the value text as stored in the document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCast`] when `raw` cannot be read as `Self`.
    fn from_raw(raw: &str) -> Result<Self>;
}

/// Renders a value as raw INI text.
pub trait ToRaw {
    /// Produces the raw text that will be stored and written back.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Value`] when the value has no representation the
    /// parser would accept (negative or non-finite numbers, strings spanning
    /// lines, strings containing `=` or both quote characters).
    fn to_raw(&self) -> Result<String>;
}

/// Strips exactly one leading and one trailing quote character from a quoted raw value.
///
/// Unquoted raw values are returned as they are.
#[must_use]
pub fn unquote(raw: &str) -> &str {
    if is_quoted(raw) && raw.len() >= 2 {
        &raw[1..raw.len() - 1]
    } else {
        raw
    }
}

/// Wraps `s` in quotes so the parser reads it back unchanged.
///
/// Double quotes are used unless `s` itself contains one, in which case
/// single quotes are used.
///
/// # Errors
///
/// Fails if `s` spans several lines, contains `=` or contains both kinds
/// of quote.
pub fn quote(s: &str) -> Result<String> {
    if s.contains(['\n', '\r']) {
        return Err(Error::value(s, "string values cannot span several lines"));
    }
    if s.contains('=') {
        return Err(Error::value(s, "string values cannot contain '='"));
    }
    match (s.contains('"'), s.contains('\'')) {
        (false, _) => Ok(format!("\"{}\"", s)),
        (true, false) => Ok(format!("'{}'", s)),
        (true, true) => Err(Error::value(
            s,
            "string values cannot contain both '\"' and '\\''",
        )),
    }
}

impl FromRaw for String {
    fn from_raw(raw: &str) -> Result<Self> {
        Ok(unquote(raw).to_string())
    }
}

impl ToRaw for str {
    fn to_raw(&self) -> Result<String> {
        quote(self)
    }
}

impl ToRaw for String {
    fn to_raw(&self) -> Result<String> {
        quote(self)
    }
}

impl<T: ToRaw + ?Sized> ToRaw for &T {
    fn to_raw(&self) -> Result<String> {
        (**self).to_raw()
    }
}

macro_rules! impl_raw_number {
    ($($ty:ty),*) => {
        $(
            impl FromRaw for $ty {
                fn from_raw(raw: &str) -> Result<Self> {
                    raw.parse::<$ty>()
                        .map_err(|_| Error::invalid_cast(raw, stringify!($ty)))
                }
            }

            impl ToRaw for $ty {
                fn to_raw(&self) -> Result<String> {
                    let rendered = self.to_string();
                    validate_number(&rendered)?;
                    Ok(rendered)
                }
            }
        )*
    };
}

impl_raw_number!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

/// A dynamically-typed INI value.
///
/// The grammar knows three kinds of value: quoted strings, integer-like
/// tokens (digits only) and float-like tokens (digits with one `.`).
///
/// # Examples
///
/// ```rust
/// use strict_ini::{FromRaw, Value};
///
/// assert_eq!(Value::from_raw("'hi'").unwrap(), Value::String("hi".to_string()));
/// assert_eq!(Value::from_raw("1.5").unwrap(), Value::Float(1.5));
/// assert_eq!(Value::Integer(7).to_string(), "7");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    String(String),
    Integer(u64),
    Float(f64),
}

impl Value {
    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns `true` if the value is an integer.
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Value::Integer(_))
    }

    /// Returns `true` if the value is a float.
    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    /// If the value is a string, returns a reference to it.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is an integer, returns it.
    #[inline]
    #[must_use]
    pub const fn as_u64(&self) -> Option<u64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// If the value is numeric, returns it as an `f64`.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(n) => Some(*n as f64),
            Value::Float(f) => Some(*f),
            Value::String(_) => None,
        }
    }
}

impl FromRaw for Value {
    fn from_raw(raw: &str) -> Result<Self> {
        if is_quoted(raw) {
            return Ok(Value::String(unquote(raw).to_string()));
        }
        if raw.contains('.') {
            f64::from_raw(raw).map(Value::Float)
        } else {
            u64::from_raw(raw).map(Value::Integer)
        }
    }
}

impl ToRaw for Value {
    fn to_raw(&self) -> Result<String> {
        match self {
            Value::String(s) => quote(s),
            Value::Integer(n) => n.to_raw(),
            Value::Float(f) => f.to_raw(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "{}", s),
            Value::Integer(n) => write!(f, "{}", n),
            Value::Float(x) => write!(f, "{}", x),
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::String(s) => serializer.serialize_str(s),
            Value::Integer(n) => serializer.serialize_u64(*n),
            Value::Float(f) => serializer.serialize_f64(*f),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Integer(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Integer(n as u64)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}
