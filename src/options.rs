//! Configuration options for INI output.
//!
//! This module provides types to customize how a document is written:
//!
//! - [`IniOptions`]: Main configuration struct
//! - [`LineEnding`]: `\n` or `\r\n` between lines
//!
//! The defaults produce the canonical layout the parser reads back: one
//! `\n` between lines and one blank line between sections. Parsing itself has
//! no options.
//!
//! Options derive `Serialize`/`Deserialize`, so they can be stored alongside
//! an application's own settings.
//!
//! ## Examples
//!
//! ```rust
//! use strict_ini::{from_str, to_string_with_options, IniOptions, LineEnding};
//!
//! let ini = from_str("[a]\nx = 1\n[b]\ny = 2").unwrap();
//!
//! let options = IniOptions::new().with_line_ending(LineEnding::CrLf);
//! assert_eq!(
//!     to_string_with_options(&ini, &options),
//!     "[a]\r\nx=1\r\n\r\n[b]\r\ny=2"
//! );
//! ```

use serde::{Deserialize, Serialize};

/// Line terminator written between output lines.
///
/// # Examples
///
/// ```rust
/// use strict_ini::LineEnding;
///
/// assert_eq!(LineEnding::Lf.as_str(), "\n");
/// assert_eq!(LineEnding::CrLf.as_str(), "\r\n");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    /// Returns the string representation of this line ending.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// Configuration options for INI output.
///
/// # Examples
///
/// ```rust
/// use strict_ini::{IniOptions, LineEnding};
///
/// let options = IniOptions::new();
/// assert_eq!(options.line_ending, LineEnding::Lf);
/// assert_eq!(options.section_spacing, 1);
///
/// let options = IniOptions::new().with_section_spacing(2);
/// assert_eq!(options.section_spacing, 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IniOptions {
    pub line_ending: LineEnding,
    /// Number of blank lines written between two sections.
    pub section_spacing: usize,
}

impl Default for IniOptions {
    fn default() -> Self {
        IniOptions {
            line_ending: LineEnding::default(),
            section_spacing: 1,
        }
    }
}

impl IniOptions {
    /// Creates default options (`\n` line endings, one blank line between sections).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the line terminator.
    #[must_use]
    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    /// Sets the number of blank lines between sections.
    #[must_use]
    pub fn with_section_spacing(mut self, blank_lines: usize) -> Self {
        self.section_spacing = blank_lines;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_from_json() {
        let options: IniOptions =
            serde_json::from_str(r#"{"line_ending": "crlf"}"#).unwrap();
        assert_eq!(options.line_ending, LineEnding::CrLf);
        assert_eq!(options.section_spacing, 1);
    }

    #[test]
    fn test_options_to_json() {
        let json = serde_json::to_string(&IniOptions::new().with_section_spacing(0)).unwrap();
        assert_eq!(json, r#"{"line_ending":"lf","section_spacing":0}"#);
    }
}
