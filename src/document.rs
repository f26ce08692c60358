//! The INI document: an ordered collection of sections.

use crate::map::OrderedMap;
use crate::section::Section;
use crate::value::FromRaw;
use crate::{Error, Result};
use serde::ser::{Error as _, SerializeMap};
use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::Index;

/// A parsed or programmatically built INI document.
///
/// Sections keep the order their headers appeared in (or were added in), and
/// that order is the order they are written back in. Section names are unique.
///
/// # Examples
///
/// ```rust
/// use strict_ini::{from_str, to_string};
///
/// let text = "[server] # front\nhost = 'localhost'\nport = 8080\n\n[db]\npool = 4";
/// let mut ini = from_str(text).unwrap();
///
/// assert_eq!(ini.section_names().collect::<Vec<_>>(), vec!["server", "db"]);
/// assert_eq!(ini.get::<String>("server", "host").unwrap(), "localhost");
///
/// ini.section_mut("db").unwrap().item_mut("pool").unwrap().set(8).unwrap();
/// assert_eq!(
///     to_string(&ini),
///     "[server] # front\nhost='localhost'\nport=8080\n\n[db]\npool=8"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Ini {
    sections: OrderedMap<Section>,
}

impl Ini {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Ini {
            sections: OrderedMap::new(),
        }
    }

    /// Returns the section called `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Lookup`] if there is no such section.
    pub fn section(&self, name: &str) -> Result<&Section> {
        self.sections.get(name).ok_or_else(|| missing_section(name))
    }

    /// Returns the section called `name` for in-place editing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Lookup`] if there is no such section.
    pub fn section_mut(&mut self, name: &str) -> Result<&mut Section> {
        self.sections
            .get_mut(name)
            .ok_or_else(|| missing_section(name))
    }

    #[must_use]
    pub fn has_section(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    /// Appends a new, empty section.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Section`] if `name` is not made only of ASCII letters
    /// or a section with that name already exists.
    pub fn add_section(&mut self, name: &str) -> Result<&mut Section> {
        self.insert(Section::new(name)?)
    }

    /// Reads the value of `key` in section `section` as `T`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Lookup`] if the section or key is absent, or
    /// [`Error::InvalidCast`] if the value cannot be read as `T`.
    pub fn get<T: FromRaw>(&self, section: &str, key: &str) -> Result<T> {
        self.section(section)?.get(key)
    }

    /// Appends an already-built section, refusing duplicate names.
    pub(crate) fn insert(&mut self, section: Section) -> Result<&mut Section> {
        self.sections
            .try_insert(section.name().to_string(), section)
            .map_err(|(name, _)| Error::section(&name, "section is declared more than once"))
    }

    /// Returns an iterator over the sections, in document order.
    pub fn iter(&self) -> indexmap::map::Values<'_, String, Section> {
        self.sections.values()
    }

    /// Returns a mutable iterator over the sections, in document order.
    pub fn iter_mut(&mut self) -> indexmap::map::ValuesMut<'_, String, Section> {
        self.sections.values_mut()
    }

    /// Returns an iterator over the section names, in document order.
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// Returns the number of sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Total number of items across all sections.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.iter().map(Section::len).sum()
    }
}

impl Index<&str> for Ini {
    type Output = Section;

    /// # Panics
    ///
    /// Panics if the section does not exist; use [`Ini::section`] to handle
    /// that case.
    fn index(&self, name: &str) -> &Section {
        match self.sections.get(name) {
            Some(section) => section,
            None => panic!("no section named {:?}", name),
        }
    }
}

impl<'a> IntoIterator for &'a Ini {
    type Item = &'a Section;
    type IntoIter = indexmap::map::Values<'a, String, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Ini {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::to_string(self))
    }
}

/// Serializes as a map of section name to a map of key to [`Value`](crate::Value).
///
/// Comments are not part of this view.
impl Serialize for Ini {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for section in self.iter() {
            map.serialize_entry(section.name(), &SectionValues(section))?;
        }
        map.end()
    }
}

struct SectionValues<'a>(&'a Section);

impl Serialize for SectionValues<'_> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for item in self.0.iter() {
            let value = item.value().map_err(S::Error::custom)?;
            map.serialize_entry(item.key(), &value)?;
        }
        map.end()
    }
}

fn missing_section(name: &str) -> Error {
    Error::lookup(format!("no section named {:?}", name))
}
