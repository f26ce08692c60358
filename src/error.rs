//! Error types for INI parsing, access and serialization.
//!
//! Every failure the crate can report is one variant of [`Error`]. Parsing
//! stops at the first malformed line, so a parse either yields a complete
//! [`Ini`](crate::Ini) or exactly one error describing the offending line.
//!
//! ## Error Categories
//!
//! - **I/O Errors**: the backing file could not be read or written
//! - **Syntax Errors**: structural problems (wrong `=` count, unterminated
//!   section or string, stray text before a comment, standalone comments,
//!   items outside any section, empty values)
//! - **Section Errors**: invalid or duplicated section names
//! - **Key Errors**: invalid or duplicated item keys
//! - **Value Errors**: malformed numeric tokens, or values that cannot be
//!   written back in a parseable form
//! - **Invalid Cast Errors**: typed access to a value of the wrong shape
//! - **Lookup Errors**: indexing a section or key that does not exist
//!
//! ## Examples
//!
//! ```rust
//! use strict_ini::{from_str, Error, ErrorKind};
//!
//! let err = from_str("[server]\nport = 80 80").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::Syntax);
//! assert_eq!(err.line(), Some(2));
//! assert!(err.to_string().contains("line 2"));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors raised while parsing, accessing or writing an INI document.
///
/// Variants produced while parsing carry the 1-based line number of the offending
/// line; the same variants produced by programmatic edits carry `None`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The backing resource could not be opened, read or written
    #[error("IO error: {0}")]
    Io(String),

    /// Structural grammar violation
    #[error("Syntax error{}: {msg}{}", at_line(.line), in_context(.context))]
    Syntax {
        line: Option<usize>,
        msg: String,
        context: String,
    },

    /// Section name is not purely alphabetic, or is declared twice
    #[error("Section error{}: {msg} (section {name:?})", at_line(.line))]
    Section {
        line: Option<usize>,
        name: String,
        msg: String,
    },

    /// Item key is not purely alphabetic, or already exists in its section
    #[error("Key error{}: {msg} (key {key:?})", at_line(.line))]
    Key {
        line: Option<usize>,
        key: String,
        msg: String,
    },

    /// Numeric token is malformed, or a value cannot be rendered parseably
    #[error("Value error{}: {msg} (value {value:?})", at_line(.line))]
    Value {
        line: Option<usize>,
        value: String,
        msg: String,
    },

    /// A typed read was requested for a type the raw value cannot be parsed as
    #[error("Invalid cast: cannot read {raw:?} as {target}")]
    InvalidCast { raw: String, target: String },

    /// A section or key does not exist
    #[error("Lookup error: {0}")]
    Lookup(String),
}

/// The category of an [`Error`], without its payload.
///
/// # Examples
///
/// ```rust
/// use strict_ini::{Error, ErrorKind};
///
/// assert_eq!(Error::lookup("no section \"db\"").kind(), ErrorKind::Lookup);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Io,
    Syntax,
    Section,
    Key,
    Value,
    InvalidCast,
    Lookup,
}

fn at_line(line: &Option<usize>) -> String {
    line.map(|l| format!(" at line {}", l)).unwrap_or_default()
}

fn in_context(context: &str) -> String {
    if context.is_empty() {
        String::new()
    } else {
        format!("\n  {}", context)
    }
}

impl Error {
    /// Creates a syntax error without position information.
    ///
    /// The parser attaches the line number with [`Error::with_line`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use strict_ini::Error;
    ///
    /// let err = Error::syntax("unterminated section").with_line(3);
    /// assert!(err.to_string().contains("line 3"));
    /// ```
    pub fn syntax(msg: &str) -> Self {
        Error::Syntax {
            line: None,
            msg: msg.to_string(),
            context: String::new(),
        }
    }

    /// Creates a syntax error that quotes the offending source text.
    pub fn syntax_with_context(line: usize, msg: &str, context: &str) -> Self {
        Error::Syntax {
            line: Some(line),
            msg: msg.to_string(),
            context: context.to_string(),
        }
    }

    /// Creates a section error for the given section name.
    pub fn section(name: &str, msg: &str) -> Self {
        Error::Section {
            line: None,
            name: name.to_string(),
            msg: msg.to_string(),
        }
    }

    /// Creates a key error for the given item key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use strict_ini::Error;
    ///
    /// let err = Error::key("a1", "key must contain only ASCII letters");
    /// assert!(err.to_string().contains("\"a1\""));
    /// ```
    pub fn key(key: &str, msg: &str) -> Self {
        Error::Key {
            line: None,
            key: key.to_string(),
            msg: msg.to_string(),
        }
    }

    /// Creates a value error for the given raw value.
    pub fn value(value: &str, msg: &str) -> Self {
        Error::Value {
            line: None,
            value: value.to_string(),
            msg: msg.to_string(),
        }
    }

    /// Creates an invalid cast error naming the requested target type.
    pub fn invalid_cast(raw: &str, target: &str) -> Self {
        Error::InvalidCast {
            raw: raw.to_string(),
            target: target.to_string(),
        }
    }

    /// Creates a lookup error.
    pub fn lookup<T: fmt::Display>(msg: T) -> Self {
        Error::Lookup(msg.to_string())
    }

    /// Creates an I/O error for file reading/writing failures.
    pub fn io<T: fmt::Display>(msg: T) -> Self {
        Error::Io(msg.to_string())
    }

    /// Attaches a 1-based line number to a position-carrying error.
    ///
    /// Errors that already carry a line keep it; variants without a position
    /// are returned unchanged.
    #[must_use]
    pub fn with_line(mut self, line_no: usize) -> Self {
        match &mut self {
            Error::Syntax { line, .. }
            | Error::Section { line, .. }
            | Error::Key { line, .. }
            | Error::Value { line, .. } => {
                line.get_or_insert(line_no);
            }
            Error::Io(_) | Error::InvalidCast { .. } | Error::Lookup(_) => {}
        }
        self
    }

    /// Attaches a 1-based line number and, for syntax errors, the source line.
    ///
    /// A context already present is kept.
    #[must_use]
    pub fn with_line_context(self, line_no: usize, source: &str) -> Self {
        match self.with_line(line_no) {
            Error::Syntax {
                line,
                msg,
                context,
            } if context.is_empty() => Error::Syntax {
                line,
                msg,
                context: source.to_string(),
            },
            other => other,
        }
    }

    /// Returns the offending source text quoted by a syntax error, if any.
    #[must_use]
    pub fn context(&self) -> Option<&str> {
        match self {
            Error::Syntax { context, .. } if !context.is_empty() => Some(context),
            _ => None,
        }
    }

    /// Returns the line number the error was raised at, if it came from parsing.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::Syntax { line, .. }
            | Error::Section { line, .. }
            | Error::Key { line, .. }
            | Error::Value { line, .. } => *line,
            Error::Io(_) | Error::InvalidCast { .. } | Error::Lookup(_) => None,
        }
    }

    /// Returns the category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Error::Io(_) => ErrorKind::Io,
            Error::Syntax { .. } => ErrorKind::Syntax,
            Error::Section { .. } => ErrorKind::Section,
            Error::Key { .. } => ErrorKind::Key,
            Error::Value { .. } => ErrorKind::Value,
            Error::InvalidCast { .. } => ErrorKind::InvalidCast,
            Error::Lookup(_) => ErrorKind::Lookup,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
