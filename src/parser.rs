//! Line-oriented INI parsing.
//!
//! The [`Parser`] classifies each input line on its own, top to bottom, and
//! the first rule that matches wins:
//!
//! 1. an empty line is skipped; a line starting with `#` or `;` is rejected
//!    (comments may only trail a header or an item)
//! 2. a line starting with `[` is a section header
//! 3. anything else is an item line, `key = value [comment]`
//!
//! Parsing stops at the first malformed line. The error carries the 1-based
//! line number (and, for syntax errors, the line itself) and no partial
//! document is returned.
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use strict_ini::from_str;
//!
//! let ini = from_str("[server]\nport = 8080").unwrap();
//! assert_eq!(ini.get::<u16>("server", "port").unwrap(), 8080);
//! ```
//!
//! The parser can also be fed line by line:
//!
//! ```rust
//! use strict_ini::Parser;
//!
//! let mut parser = Parser::new();
//! parser.feed("[server]").unwrap();
//! parser.feed("port = 8080").unwrap();
//! let ini = parser.finish().unwrap();
//! assert!(ini.section("server").unwrap().has_item("port"));
//! ```
//!
//! Once a line has been rejected the parser stays failed: later calls to
//! [`Parser::feed`] and [`Parser::finish`] return the same error.
//!
//! ```rust
//! use strict_ini::Parser;
//!
//! let mut parser = Parser::new();
//! parser.feed("[server]").unwrap();
//! assert!(parser.feed("port = 80.80.80").is_err());
//! assert!(parser.finish().is_err());
//! ```

use crate::item::{check_key, Item};
use crate::lexical::{
    is_quoted, parse_number, parse_quoted, strip_outer_whitespace, verify_and_split_comment,
    COMMENT_MARKERS,
};
use crate::section::Section;
use crate::{Error, Ini, Result};
use tracing::{debug, trace, warn};

/// The INI parser.
///
/// Holds the document being built, the section that item lines are
/// currently added to, and the first error seen.
#[derive(Debug, Default)]
pub struct Parser {
    document: Ini,
    active_section: Option<String>,
    line: usize,
    failure: Option<Error>,
}

/// How a single line was classified.
enum Line<'a> {
    Blank,
    Header {
        name: &'a str,
        comment: Option<&'a str>,
    },
    Item {
        key: &'a str,
        value: &'a str,
        comment: Option<&'a str>,
    },
}

impl Parser {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses every line of `lines` and returns the finished document.
    ///
    /// # Errors
    ///
    /// Returns the error for the first malformed line.
    pub fn parse<I, S>(mut self, lines: I) -> Result<Ini>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.feed(line.as_ref())?;
        }
        let document = self.finish()?;
        debug!(
            sections = document.len(),
            items = document.item_count(),
            "parsed INI document"
        );
        Ok(document)
    }

    /// Parses one more line (without its line ending).
    ///
    /// # Errors
    ///
    /// Returns the error for this line, tagged with its line number, or the
    /// earlier error if a previous line was already rejected.
    pub fn feed(&mut self, line: &str) -> Result<()> {
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }
        self.line += 1;
        let line_no = self.line;
        self.feed_line(line).map_err(|err| {
            let err = err.with_line_context(line_no, line);
            warn!(line = line_no, error = %err, "INI parse aborted");
            self.failure = Some(err.clone());
            err
        })
    }

    /// Returns the finished document.
    ///
    /// # Errors
    ///
    /// Returns the first error reported by [`Parser::feed`]; a document that
    /// failed to parse is never handed out.
    pub fn finish(self) -> Result<Ini> {
        match self.failure {
            Some(err) => Err(err),
            None => Ok(self.document),
        }
    }

    fn feed_line(&mut self, line: &str) -> Result<()> {
        match classify(line)? {
            Line::Blank => Ok(()),
            Line::Header { name, comment } => self.open_section(name, comment),
            Line::Item {
                key,
                value,
                comment,
            } => self.add_item(key, value, comment),
        }
    }

    fn open_section(&mut self, name: &str, comment: Option<&str>) -> Result<()> {
        let section = Section::new(name)?.with_comment(comment);
        self.document.insert(section)?;
        debug!(line = self.line, section = name, "opened section");
        self.active_section = Some(name.to_string());
        Ok(())
    }

    fn add_item(&mut self, key: &str, value: &str, comment: Option<&str>) -> Result<()> {
        let section_name = self
            .active_section
            .as_deref()
            .ok_or_else(|| Error::syntax("items outside of a section are not supported"))?;
        let section = self.document.section_mut(section_name)?;
        section.insert(Item::from_parts(key, value, comment))?;
        trace!(line = self.line, key, value, "parsed item");
        Ok(())
    }
}

fn classify(line: &str) -> Result<Line<'_>> {
    if line.is_empty() {
        return Ok(Line::Blank);
    }
    if line.starts_with(COMMENT_MARKERS) {
        return Err(Error::syntax(
            "comments are only allowed after a section header or an item",
        ));
    }
    if line.starts_with('[') {
        return parse_header(line);
    }
    parse_item(line)
}

fn parse_header(line: &str) -> Result<Line<'_>> {
    let (name, comment) = if line.ends_with(']') {
        (&line[1..line.len() - 1], None)
    } else {
        let close = line
            .find(']')
            .ok_or_else(|| Error::syntax("unterminated section"))?;
        (&line[1..close], verify_and_split_comment(&line[close + 1..])?)
    };
    Ok(Line::Header { name, comment })
}

fn parse_item(line: &str) -> Result<Line<'_>> {
    let mut equals = line.match_indices('=');
    let delim = match (equals.next(), equals.next()) {
        (Some((idx, _)), None) => idx,
        _ => {
            return Err(Error::syntax(
                "item line must contain exactly one '='",
            ))
        }
    };

    let key = strip_outer_whitespace(&line[..delim]);
    check_key(key)?;

    let value = strip_outer_whitespace(&line[delim + 1..]);
    if value.is_empty() {
        return Err(Error::syntax("missing value after '='"));
    }

    let parsed = if is_quoted(value) {
        parse_quoted(value)?
    } else {
        parse_number(value)?
    };

    Ok(Line::Item {
        key,
        value: parsed.value,
        comment: parsed.comment,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    fn parse(text: &str) -> Result<Ini> {
        Parser::new().parse(text.lines())
    }

    #[test]
    fn test_items_follow_their_header() {
        let ini = parse("[a]\nx = 1\n\n[b]\ny = 'two'").unwrap();
        assert_eq!(ini.section("a").unwrap().keys().collect::<Vec<_>>(), ["x"]);
        assert_eq!(ini.get::<String>("b", "y").unwrap(), "two");
    }

    #[test]
    fn test_header_with_comment() {
        let ini = parse("[a]   ; first").unwrap();
        assert_eq!(ini.section("a").unwrap().comment(), Some("; first"));
    }

    #[test]
    fn test_header_with_stray_text() {
        let err = parse("[a] b").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Syntax);
        assert_eq!(err.line(), Some(1));
        assert_eq!(err.context(), Some("[a] b"));
        assert!(err.to_string().ends_with("\n  [a] b"));
    }

    #[test]
    fn test_syntax_errors_quote_their_line() {
        let err = parse("[a]
x = 'open").unwrap_err();
        assert_eq!(err.line(), Some(2));
        assert_eq!(err.context(), Some("x = 'open"));

        let err = parse("[a]
x1 = 1").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Key);
        assert_eq!(err.context(), None);
    }

    #[test]
    fn test_unterminated_section() {
        let err = parse("[foo").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Syntax);
        assert!(err.to_string().contains("unterminated section"));
    }

    #[test]
    fn test_header_name_rules() {
        assert_eq!(parse("[]").unwrap_err().kind(), ErrorKind::Section);
        assert_eq!(parse("[a1]").unwrap_err().kind(), ErrorKind::Section);
        assert_eq!(parse("[ a ]").unwrap_err().kind(), ErrorKind::Section);
    }

    #[test]
    fn test_duplicate_section_is_rejected() {
        let err = parse("[a]\nx = 1\n[a]").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Section);
        assert_eq!(err.line(), Some(3));
    }

    #[test]
    fn test_standalone_comment_is_rejected() {
        assert_eq!(parse("# hello").unwrap_err().kind(), ErrorKind::Syntax);
        assert_eq!(
            parse("[a]\n; hello").unwrap_err().kind(),
            ErrorKind::Syntax
        );
    }

    #[test]
    fn test_orphan_item() {
        let err = parse("x = 1\n[a]").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Syntax);
        assert!(err.to_string().contains("outside of a section"));
        assert_eq!(err.line(), Some(1));
    }

    #[test]
    fn test_equals_count() {
        for line in ["x 1", "x == 1", "x = 1 = 2", "x = '='"] {
            let err = parse(&format!("[a]\n{}", line)).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Syntax, "{:?}", line);
            assert_eq!(err.line(), Some(2));
        }
    }

    #[test]
    fn test_key_rules() {
        assert_eq!(parse("[a]\na1 = 1").unwrap_err().kind(), ErrorKind::Key);
        assert_eq!(parse("[a]\n = 1").unwrap_err().kind(), ErrorKind::Key);
        assert!(parse("[a]\n  alpha   =   1  ").is_ok());
    }

    #[test]
    fn test_duplicate_key() {
        let err = parse("[a]\nx = 1\nx = 2").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Key);
        assert_eq!(err.line(), Some(3));
    }

    #[test]
    fn test_empty_value() {
        assert_eq!(parse("[a]\nx =").unwrap_err().kind(), ErrorKind::Syntax);
        assert_eq!(parse("[a]\nx =   ").unwrap_err().kind(), ErrorKind::Syntax);
    }

    #[test]
    fn test_whitespace_only_line_is_not_blank() {
        assert_eq!(parse("[a]\n   ").unwrap_err().kind(), ErrorKind::Syntax);
    }

    #[test]
    fn test_feed_tracks_line_numbers() {
        let mut parser = Parser::new();
        parser.feed("[a]").unwrap();
        parser.feed("").unwrap();
        let err = parser.feed("x = 1.2.3").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Value);
        assert_eq!(err.line(), Some(3));
    }

    #[test]
    fn test_failed_feed_poisons_parser() {
        let mut parser = Parser::new();
        parser.feed("[a]").unwrap();
        parser.feed("x = 1").unwrap();
        let err = parser.feed("y = 1.2.3").unwrap_err();

        assert_eq!(parser.feed("z = 2").unwrap_err(), err);
        assert_eq!(parser.finish().unwrap_err(), err);
    }

    #[test]
    fn test_finish_after_clean_feed() {
        let mut parser = Parser::new();
        parser.feed("[a]").unwrap();
        parser.feed("x = 1").unwrap();
        let ini = parser.finish().unwrap();
        assert_eq!(ini.item_count(), 1);
    }
}
