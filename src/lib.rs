//! # strict_ini
//!
//! A strict, line-oriented reader and writer for a constrained INI format.
//!
//! ## What does it accept?
//!
//! Sections of ordered `key = value` items, where values are quoted strings
//! or plain numbers, each optionally followed by a `#` or `;` comment. Keys and
//! section names are ASCII letters only. Anything outside this grammar is an
//! error with a line number; see [`grammar`] for the full rules.
//!
//! ## Key Features
//!
//! - **Strict**: no guessing, the first malformed line aborts the parse
//! - **Round-trip**: section order, item order and comments survive a
//!   parse/write cycle
//! - **Typed access**: read values as strings, integers or floats on demand
//! - **Safe edits**: writes that would produce unparseable text are refused
//!
//! ## Quick Start
//!
//! ```rust
//! use strict_ini::{from_str, to_string};
//!
//! let text = "\
//! [server] # public
//! host = \"example.org\"
//! port = 8080 ; default
//!
//! [limits]
//! ratio = 0.75";
//!
//! let mut ini = from_str(text).unwrap();
//! assert_eq!(ini.get::<String>("server", "host").unwrap(), "example.org");
//! assert_eq!(ini.get::<u16>("server", "port").unwrap(), 8080);
//! assert_eq!(ini.get::<f64>("limits", "ratio").unwrap(), 0.75);
//!
//! ini.section_mut("server").unwrap().item_mut("port").unwrap().set(9090).unwrap();
//! ini.add_section("cache").unwrap().add_item("size", 64).unwrap();
//!
//! assert_eq!(
//!     to_string(&ini),
//!     "[server] # public\nhost=\"example.org\"\nport=9090 ; default\n\n\
//!      [limits]\nratio=0.75\n\n[cache]\nsize=64"
//! );
//! ```
//!
//! ## Errors
//!
//! ```rust
//! use strict_ini::{from_str, ErrorKind};
//!
//! let err = from_str("[server]\nport = 80.8.0").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::Value);
//! assert_eq!(err.line(), Some(2));
//! ```
//!
//! ## Files
//!
//! [`IniFile`] reads a document from disk and writes the whole document back
//! on [`IniFile::save`].
//!
//! ## Logging
//!
//! Parsing and file operations emit [`tracing`] events (`debug` per section,
//! `trace` per item, `warn` on a failed parse, `info` on open and save). Install
//! a subscriber in the application to see them.
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`simple.rs`** - parse, read and write back
//! - **`edit_file.rs`** - open, edit and save a file
//! - **`macro.rs`** - build a document with the `ini!` macro
//!
//! Run any example with: `cargo run --example <name>`

pub mod document;
pub mod error;
pub mod file;
pub mod grammar;
pub mod item;
pub mod lexical;
pub mod macros;
pub mod map;
pub mod options;
pub mod parser;
pub mod section;
pub mod ser;
pub mod value;

pub use document::Ini;
pub use error::{Error, ErrorKind, Result};
pub use file::IniFile;
pub use item::Item;
pub use map::OrderedMap;
pub use options::{IniOptions, LineEnding};
pub use parser::Parser;
pub use section::Section;
pub use ser::Serializer;
pub use value::{FromRaw, ToRaw, Value};

use std::io;

/// Parses a document from a sequence of lines (line endings already removed).
///
/// # Examples
///
/// ```rust
/// use strict_ini::from_lines;
///
/// let ini = from_lines(["[a]", "x = 1"]).unwrap();
/// assert_eq!(ini.get::<u8>("a", "x").unwrap(), 1);
/// ```
///
/// # Errors
///
/// Returns the error for the first malformed line.
pub fn from_lines<I, S>(lines: I) -> Result<Ini>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Parser::new().parse(lines)
}

/// Parses a document from text. Both `\n` and `\r\n` line endings are accepted.
///
/// # Errors
///
/// Returns the error for the first malformed line.
pub fn from_str(s: &str) -> Result<Ini> {
    from_lines(s.lines())
}

/// Parses a document from UTF-8 bytes.
///
/// # Errors
///
/// Returns [`Error::Io`] if the bytes are not valid UTF-8, or the error for
/// the first malformed line.
pub fn from_slice(v: &[u8]) -> Result<Ini> {
    let s = std::str::from_utf8(v).map_err(|e| Error::io(format!("invalid UTF-8: {}", e)))?;
    from_str(s)
}

/// Reads a whole stream and parses it.
///
/// # Examples
///
/// ```rust
/// use strict_ini::from_reader;
/// use std::io::Cursor;
///
/// let ini = from_reader(Cursor::new(b"[a]\nx = 'y'")).unwrap();
/// assert_eq!(ini.get::<String>("a", "x").unwrap(), "y");
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails, or the error for the first
/// malformed line.
pub fn from_reader<R: io::Read>(mut reader: R) -> Result<Ini> {
    let mut string = String::new();
    reader.read_to_string(&mut string)?;
    from_str(&string)
}

/// Renders a document with the default layout.
#[must_use]
pub fn to_string(ini: &Ini) -> String {
    to_string_with_options(ini, &IniOptions::default())
}

/// Renders a document with custom options.
#[must_use]
pub fn to_string_with_options(ini: &Ini, options: &IniOptions) -> String {
    let mut serializer = Serializer::new(options);
    serializer.write_document(ini);
    serializer.into_string()
}

/// Renders a document as output lines, without line endings.
#[must_use]
pub fn to_lines(ini: &Ini) -> Vec<String> {
    let options = IniOptions::default();
    let mut serializer = Serializer::new(&options);
    serializer.write_document(ini);
    serializer.into_lines()
}

/// Writes a document to a stream with the default layout.
///
/// # Errors
///
/// Returns [`Error::Io`] if writing fails.
pub fn to_writer<W: io::Write>(writer: W, ini: &Ini) -> Result<()> {
    to_writer_with_options(writer, ini, &IniOptions::default())
}

/// Writes a document to a stream with custom options.
///
/// # Errors
///
/// Returns [`Error::Io`] if writing fails.
pub fn to_writer_with_options<W: io::Write>(
    mut writer: W,
    ini: &Ini,
    options: &IniOptions,
) -> Result<()> {
    writer.write_all(to_string_with_options(ini, options).as_bytes())?;
    Ok(())
}
