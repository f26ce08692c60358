//! INI Format Grammar
//!
//! This module documents the INI dialect read and written by this library.
//! It is deliberately small and strict: anything not described here is an
//! error rather than something to guess about.
//!
//! # Overview
//!
//! A document is a sequence of lines. Lines are processed top to bottom and
//! each line is classified on its own; no rule looks ahead or behind.
//!
//! ```text
//! [server] # public endpoint
//! host = "example.org"
//! port = 8080 ; default
//!
//! [limits]
//! ratio = 0.75
//! ```
//!
//! # Line Kinds
//!
//! | First character | Kind | Notes |
//! |-----------------|------|-------|
//! | (empty line) | blank | skipped |
//! | `#` or `;` | error | comments cannot stand on their own line |
//! | `[` | section header | `[name]` with optional trailing comment |
//! | anything else | item | `key = value` with optional trailing comment |
//!
//! A line holding only spaces is not blank: it is read as an item line and
//! rejected for having no `=`.
//!
//! # Section Headers
//!
//! - If the line ends with `]`, the name is everything between the brackets.
//! - Otherwise the name ends at the first `]`, and the rest of the line must
//!   be blank up to an optional comment.
//! - A line with no `]` at all is an unterminated section.
//! - Names are one or more ASCII letters: `[server]` is valid, `[db1]`,
//!   `[my section]` and `[ server ]` are not.
//! - A name may be declared once per document.
//!
//! # Items
//!
//! - The line must contain exactly one `=`.
//! - The key (left of `=`, surrounding whitespace removed) is one or more
//!   ASCII letters and is unique within its section.
//! - The value (right of `=`, surrounding whitespace removed) must not be
//!   empty.
//! - An item must follow a section header; there are no global keys.
//!
//! # Values
//!
//! ## Quoted strings
//!
//! A value starting with `"` or `'` runs to the next occurrence of the same
//! quote character. There are no escapes, so a string cannot contain its own
//! quote character (but may contain the other one, and may contain `#`,
//! `;` and spaces):
//!
//! ```text
//! greeting = "hi # there"     ; value is "hi # there", no comment
//! greeting = "hi" # greet     ; value is "hi", comment is "# greet"
//! quote    = 'say "hi"'
//! ```
//!
//! ## Numbers
//!
//! Any other value is a numeric token. The token ends at the first space,
//! `#` or `;` and must be ASCII digits with at most one `.`:
//!
//! | Token | Accepted |
//! |-------|----------|
//! | `42` | yes |
//! | `3.14` | yes |
//! | `1.` / `.5` | yes |
//! | `.` | no |
//! | `3.1.4` | no |
//! | `-1`, `+1`, `1e5` | no |
//! | `12a`, `true` | no |
//!
//! # Comments
//!
//! A comment starts at `#` or `;` and runs to the end of the line. It may
//! only follow a complete section header or value, separated by nothing but
//! whitespace. The comment is kept (marker included) and written back after a
//! single space.
//!
//! # Output Layout
//!
//! ```text
//! [name] comment
//! key=value comment
//! key=value
//!
//! [next]
//! ```
//!
//! Items are written as `key=value` with no padding, one blank line separates
//! sections, and there is no line ending after the last line.
//!
//! # Edits
//!
//! Values and comments set through the API must survive being written and
//! read back, so some text that could be stored is refused instead:
//!
//! - a string containing `=` (the item line would have two), a line break,
//!   or both quote characters
//! - a negative or non-finite number
//! - an item comment containing `=` or ending in whitespace
//! - a section comment ending with `]`
