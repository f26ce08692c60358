//! Named, ordered groups of items.

use crate::item::{check_comment, check_key, Item};
use crate::lexical::is_alphabetic;
use crate::map::OrderedMap;
use crate::value::{FromRaw, ToRaw};
use crate::{Error, Result};
use std::fmt;
use std::ops::Index;

/// A `[name]` header and the items that follow it, in the order they were added.
///
/// Keys are unique within a section: adding a key that already exists fails
/// and leaves the section unchanged.
///
/// # Examples
///
/// ```rust
/// use strict_ini::Ini;
///
/// let mut ini = Ini::new();
/// let server = ini.add_section("server").unwrap();
/// server.add_item("host", "localhost").unwrap();
/// server.add_item("port", 8080).unwrap();
///
/// assert!(server.add_item("port", 9090).is_err());
/// assert_eq!(server.get::<u16>("port").unwrap(), 8080);
/// assert_eq!(server.to_string(), "[server]\nhost=\"localhost\"\nport=8080");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    name: String,
    comment: Option<String>,
    items: OrderedMap<Item>,
}

impl Section {
    /// Creates an empty section.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Section`] if `name` is not made only of ASCII letters.
    pub fn new(name: &str) -> Result<Self> {
        check_name(name)?;
        Ok(Section {
            name: name.to_string(),
            comment: None,
            items: OrderedMap::new(),
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The comment that trailed the `[name]` header, marker included.
    #[must_use]
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Replaces or removes the header comment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Syntax`] if the comment does not start with `#` or `;`,
    /// spans several lines or ends with `]`.
    pub fn set_comment(&mut self, comment: Option<&str>) -> Result<()> {
        if let Some(text) = comment {
            check_comment(text)?;
            if text.ends_with(']') {
                return Err(Error::syntax("section comment cannot end with ']'"));
            }
        }
        self.comment = comment.map(str::to_string);
        Ok(())
    }

    /// Returns the item stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Lookup`] if the section has no such key.
    pub fn item(&self, key: &str) -> Result<&Item> {
        self.items
            .get(key)
            .ok_or_else(|| missing_item(&self.name, key))
    }

    /// Returns the item stored under `key` for in-place editing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Lookup`] if the section has no such key.
    pub fn item_mut(&mut self, key: &str) -> Result<&mut Item> {
        let name = &self.name;
        self.items
            .get_mut(key)
            .ok_or_else(|| missing_item(name, key))
    }

    #[must_use]
    pub fn has_item(&self, key: &str) -> bool {
        self.items.contains_key(key)
    }

    /// Appends a new item built from a typed value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Key`] if `key` is invalid or already present, or
    /// [`Error::Value`] if `value` cannot be rendered parseably.
    pub fn add_item<T: ToRaw>(&mut self, key: &str, value: T) -> Result<&mut Item> {
        check_key(key)?;
        self.check_vacant(key)?;
        let item = Item::new(key, value)?;
        self.insert(item)
    }

    /// Reads the value stored under `key` as `T`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Lookup`] if the key is absent, or
    /// [`Error::InvalidCast`] if its value cannot be read as `T`.
    pub fn get<T: FromRaw>(&self, key: &str) -> Result<T> {
        self.item(key)?.get()
    }

    /// Appends an already-built item, refusing duplicate keys.
    pub(crate) fn insert(&mut self, item: Item) -> Result<&mut Item> {
        self.items
            .try_insert(item.key().to_string(), item)
            .map_err(|(key, _)| duplicate_key(&self.name, &key))
    }

    pub(crate) fn with_comment(mut self, comment: Option<&str>) -> Self {
        self.comment = comment.map(str::to_string);
        self
    }

    fn check_vacant(&self, key: &str) -> Result<()> {
        if self.items.contains_key(key) {
            Err(duplicate_key(&self.name, key))
        } else {
            Ok(())
        }
    }

    /// Returns an iterator over the items, in insertion order.
    pub fn iter(&self) -> indexmap::map::Values<'_, String, Item> {
        self.items.values()
    }

    /// Returns a mutable iterator over the items, in insertion order.
    pub fn iter_mut(&mut self) -> indexmap::map::ValuesMut<'_, String, Item> {
        self.items.values_mut()
    }

    /// Returns an iterator over the item keys, in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.items.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> IntoIterator for &'a Section {
    type Item = &'a Item;
    type IntoIter = indexmap::map::Values<'a, String, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Index<&str> for Section {
    type Output = Item;

    /// # Panics
    ///
    /// Panics if the key does not exist; use [`Section::item`] to handle
    /// that case.
    fn index(&self, key: &str) -> &Item {
        match self.items.get(key) {
            Some(item) => item,
            None => panic!("no item with key {:?} in section {:?}", key, self.name),
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::ser::section_to_string(self, &crate::IniOptions::default()))
    }
}

/// Validates a section name.
pub(crate) fn check_name(name: &str) -> Result<()> {
    if is_alphabetic(name) {
        Ok(())
    } else {
        Err(Error::section(
            name,
            "section name must contain only ASCII letters",
        ))
    }
}

fn missing_item(section: &str, key: &str) -> Error {
    Error::lookup(format!(
        "no item with key {:?} in section {:?}",
        key, section
    ))
}

fn duplicate_key(section: &str, key: &str) -> Error {
    Error::key(
        key,
        &format!("item already exists in section {:?}", section),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_new_rejects_non_alphabetic_names() {
        assert!(Section::new("server").is_ok());
        for bad in ["", "db1", "my section", "a-b"] {
            assert_eq!(
                Section::new(bad).unwrap_err().kind(),
                ErrorKind::Section,
                "{:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_duplicate_key_leaves_section_unchanged() {
        let mut section = Section::new("db").unwrap();
        section.add_item("user", "admin").unwrap();
        section.add_item("pool", 4).unwrap();

        let err = section.add_item("user", "root").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Key);
        assert_eq!(section.len(), 2);
        assert_eq!(section.get::<String>("user").unwrap(), "admin");
        assert_eq!(section.keys().collect::<Vec<_>>(), vec!["user", "pool"]);
    }

    #[test]
    fn test_invalid_value_is_not_inserted() {
        let mut section = Section::new("db").unwrap();
        assert_eq!(
            section.add_item("pool", -4).unwrap_err().kind(),
            ErrorKind::Value
        );
        assert!(!section.has_item("pool"));
    }

    #[test]
    fn test_lookup_missing_item() {
        let mut section = Section::new("db").unwrap();
        assert_eq!(section.item("x").unwrap_err().kind(), ErrorKind::Lookup);
        assert_eq!(
            section.item_mut("x").unwrap_err().kind(),
            ErrorKind::Lookup
        );
        assert_eq!(
            section.get::<u32>("x").unwrap_err().kind(),
            ErrorKind::Lookup
        );
    }

    #[test]
    fn test_display_empty_section() {
        let section = Section::new("empty").unwrap();
        assert_eq!(section.to_string(), "[empty]");
    }

    #[test]
    fn test_display_with_comment() {
        let mut section = Section::new("db").unwrap();
        section.set_comment(Some("# primary")).unwrap();
        section.add_item("port", 5432).unwrap();
        assert_eq!(section.to_string(), "[db] # primary\nport=5432");
    }

    #[test]
    fn test_comment_ending_with_bracket_is_refused() {
        let mut section = Section::new("db").unwrap();
        assert_eq!(
            section.set_comment(Some("# see [x]")).unwrap_err().kind(),
            ErrorKind::Syntax
        );
        assert_eq!(section.comment(), None);
        section.set_comment(Some("# a=b [x] y")).unwrap();
    }

    #[test]
    fn test_index_by_key() {
        let mut section = Section::new("db").unwrap();
        section.add_item("port", 5432).unwrap();
        assert_eq!(section["port"].raw_value(), "5432");
    }

    #[test]
    #[should_panic(expected = "no item with key")]
    fn test_index_missing_key_panics() {
        let section = Section::new("db").unwrap();
        let _ = &section["port"];
    }

    #[test]
    fn test_iter_mut_edits_every_item() {
        let mut section = Section::new("limits").unwrap();
        section.add_item("soft", 1).unwrap();
        section.add_item("hard", 2).unwrap();
        for item in section.iter_mut() {
            item.set(0).unwrap();
        }
        assert!(section.iter().all(|item| item.raw_value() == "0"));
    }
}
