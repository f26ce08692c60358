//! INI serialization.
//!
//! The [`Serializer`] renders a document deterministically:
//!
//! - sections in document order, each starting with `[name]` (followed by
//!   ` comment` when the header had one)
//! - one `key=value` line per item in insertion order, with ` comment`
//!   appended when present; values are written in raw form, quotes included
//! - sections separated by one blank line, no trailing line ending
//!
//! That layout is exactly what the parser accepts, so writing a document and
//! parsing the result gives back the same sections, items and comments.
//!
//! ## Usage
//!
//! ```rust
//! use strict_ini::{from_str, to_lines, to_string};
//!
//! let ini = from_str("[a]\nx =   1   # one\n[b]").unwrap();
//! assert_eq!(to_string(&ini), "[a]\nx=1 # one\n\n[b]");
//! assert_eq!(to_lines(&ini), vec!["[a]", "x=1 # one", "", "[b]"]);
//! ```

use crate::{Ini, IniOptions, Item, Section};

/// The INI serializer.
///
/// Accumulates output lines; [`Serializer::into_string`] joins them with the
/// configured line ending.
pub struct Serializer<'o> {
    lines: Vec<String>,
    options: &'o IniOptions,
}

impl<'o> Serializer<'o> {
    pub fn new(options: &'o IniOptions) -> Self {
        Serializer {
            lines: Vec::new(),
            options,
        }
    }

    /// Appends every section of `ini`.
    pub fn write_document(&mut self, ini: &Ini) {
        for (idx, section) in ini.iter().enumerate() {
            if idx > 0 {
                for _ in 0..self.options.section_spacing {
                    self.lines.push(String::new());
                }
            }
            self.write_section(section);
        }
    }

    /// Appends a section header and its items.
    pub fn write_section(&mut self, section: &Section) {
        let header = match section.comment() {
            Some(comment) => format!("[{}] {}", section.name(), comment),
            None => format!("[{}]", section.name()),
        };
        self.lines.push(header);
        for item in section.iter() {
            self.write_item(item);
        }
    }

    /// Appends a single `key=value` line.
    pub fn write_item(&mut self, item: &Item) {
        self.lines.push(item.to_string());
    }

    /// Returns the output lines, without line endings.
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// Returns the output joined with the configured line ending.
    pub fn into_string(self) -> String {
        self.lines.join(self.options.line_ending.as_str())
    }
}

pub(crate) fn section_to_string(section: &Section, options: &IniOptions) -> String {
    let mut serializer = Serializer::new(options);
    serializer.write_section(section);
    serializer.into_string()
}
