//! Insertion-ordered map used for sections and items.
//!
//! [`OrderedMap`] is a thin wrapper around [`IndexMap`]. It gives O(1) lookup
//! by name and iteration in insertion order from a single structure, so the
//! order a document is written in is always the order it was read or built in.
//!
//! Unlike a plain map, [`OrderedMap::try_insert`] never overwrites: a second
//! entry under an existing name is refused and the map is left untouched.
//!
//! ## Examples
//!
//! ```rust
//! use strict_ini::OrderedMap;
//!
//! let mut map = OrderedMap::new();
//! assert!(map.try_insert("second".to_string(), 2).is_ok());
//! assert!(map.try_insert("first".to_string(), 1).is_ok());
//! assert!(map.try_insert("second".to_string(), 3).is_err());
//!
//! let keys: Vec<_> = map.keys().map(String::as_str).collect();
//! assert_eq!(keys, vec!["second", "first"]);
//! assert_eq!(map.get("second"), Some(&2));
//! ```

use indexmap::IndexMap;

/// An insertion-ordered map of names to values.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedMap<V>(IndexMap<String, V>);

impl<V> OrderedMap<V> {
    /// Creates an empty `OrderedMap`.
    #[must_use]
    pub fn new() -> Self {
        OrderedMap(IndexMap::new())
    }

    /// Creates an empty `OrderedMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        OrderedMap(IndexMap::with_capacity(capacity))
    }

    /// Appends a new entry at the end of the map.
    ///
    /// If the key is already present the map is unchanged and the rejected
    /// pair is handed back.
    pub fn try_insert(&mut self, key: String, value: V) -> Result<&mut V, (String, V)> {
        match self.0.entry(key) {
            indexmap::map::Entry::Occupied(entry) => Err((entry.key().clone(), value)),
            indexmap::map::Entry::Vacant(entry) => Ok(entry.insert(value)),
        }
    }

    /// Returns a reference to the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        self.0.get(key)
    }

    /// Returns a mutable reference to the value stored under `key`.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.0.get_mut(key)
    }

    /// Returns `true` if the map holds an entry for `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of entries in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, V> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, V> {
        self.0.values()
    }

    /// Returns a mutable iterator over the values of the map, in insertion order.
    pub fn values_mut(&mut self) -> indexmap::map::ValuesMut<'_, String, V> {
        self.0.values_mut()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, V> {
        self.0.iter()
    }
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> IntoIterator for OrderedMap<V> {
    type Item = (String, V);
    type IntoIter = indexmap::map::IntoIter<String, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, V> IntoIterator for &'a OrderedMap<V> {
    type Item = (&'a String, &'a V);
    type IntoIter = indexmap::map::Iter<'a, String, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_insert_leaves_map_unchanged() {
        let mut map = OrderedMap::new();
        map.try_insert("a".to_string(), 1).unwrap();
        map.try_insert("b".to_string(), 2).unwrap();

        let (key, value) = map.try_insert("a".to_string(), 9).unwrap_err();
        assert_eq!(key, "a");
        assert_eq!(value, 9);
        assert_eq!(map.get("a"), Some(&1));
        assert_eq!(map.len(), 2);
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_get_mut_updates_in_place() {
        let mut map = OrderedMap::with_capacity(1);
        map.try_insert("x".to_string(), 1).unwrap();
        if let Some(v) = map.get_mut("x") {
            *v = 5;
        }
        assert_eq!(map.get("x"), Some(&5));
        assert!(map.get_mut("y").is_none());
    }
}
