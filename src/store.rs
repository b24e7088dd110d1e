//! in-memory ordered store

use serde_json::{Map, Value};
use std::iter::FromIterator;

/// store keys and values, keeping insertion order
///
/// Overwriting a key replaces its value but keeps the position it was first
/// inserted at. Lookups are exact, keys are never normalized.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Store {
    map: Map<String, Value>,
}

impl Store {
    /// new an empty store
    pub fn new() -> Self {
        Self { map: Map::new() }
    }

    /// storing a key with associated value, returns the store for chaining
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.map.insert(key.into(), value.into());
        self
    }

    /// get a value from key, `None` if the key was never set
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.map.get(key)
    }

    /// check if a key exists
    pub fn has(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    /// all keys in insertion order
    pub fn keys(&self) -> Vec<String> {
        self.map.keys().cloned().collect()
    }

    /// all values, same order as `keys`
    pub fn values(&self) -> Vec<Value> {
        self.map.values().cloned().collect()
    }

    /// all `(key, value)` pairs, same order as `keys`
    pub fn entries(&self) -> Vec<(String, Value)> {
        self.map
            .iter()
            .map(|(k, v)| (k.to_owned(), v.clone()))
            .collect()
    }

    /// remove every entry
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// number of stored entries
    pub fn size(&self) -> usize {
        self.map.len()
    }

    /// true if nothing is stored
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// borrowing iterator in insertion order
    pub fn iter(&self) -> serde_json::map::Iter<'_> {
        self.map.iter()
    }
}

impl<'a> IntoIterator for &'a Store {
    type Item = (&'a String, &'a Value);
    type IntoIter = serde_json::map::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.iter()
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for Store {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Store {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut store = Store::new();
        store.extend(iter);
        store
    }
}
