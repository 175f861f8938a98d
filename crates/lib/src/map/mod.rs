//! Insertion-ordered map from string keys to [`Value`]s.
//!
//! [`OrderedMap`] keeps two views of the same data: an order list of keys and
//! a hash map of entries. Every mutation goes through methods that update both
//! together, so the two views always hold exactly the same key set and the
//! order list never contains duplicates.
//!
//! # Usage
//!
//! ```
//! use orderedmap::{OrderedMap, Value};
//!
//! let mut map = OrderedMap::new();
//! map.set("name", "Alice");
//! map.set("age", 30);
//! map.set_at(0, "id", 7);
//!
//! assert_eq!(map.keys(), ["id", "name", "age"]);
//! assert_eq!(map.get_at(1), Some(&Value::from("Alice")));
//! assert_eq!(map.to_string(), r#"{"id":7,"name":"Alice","age":30}"#);
//! ```
//!
//! # Concurrency
//!
//! `OrderedMap` has no internal locking. Share it between threads behind a
//! `std::sync::RwLock` (one writer, many readers) or a `Mutex`.

use std::{collections::HashMap, fmt};

pub mod errors;
mod serialization;
pub mod value;

pub use errors::MapError;
pub use value::Value;

/// A map whose keys keep the order in which they were added.
///
/// Keys can be addressed by name or by position. Positions are indices into
/// the order list returned by [`OrderedMap::keys`].
///
/// Equality is order sensitive: two maps are equal only if they hold the same
/// entries in the same key order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderedMap {
    /// Key order; defines iteration, positional and serialization order
    keys: Vec<String>,
    /// Values indexed by key
    entries: HashMap<String, Value>,
}

impl OrderedMap {
    /// Creates a new empty map
    pub fn new() -> Self {
        Self {
            keys: Vec::new(),
            entries: HashMap::new(),
        }
    }

    /// Creates an empty map with room for `capacity` keys
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            keys: Vec::with_capacity(capacity),
            entries: HashMap::with_capacity(capacity),
        }
    }

    /// Returns the number of keys
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if the map holds no keys
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns true if the map contains the given key
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Gets a value by key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Gets a mutable reference to a value by key
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries.get_mut(key)
    }

    /// Gets a value by its position in the key order
    pub fn get_at(&self, pos: usize) -> Option<&Value> {
        let key = self.keys.get(pos)?;
        self.entries.get(key)
    }

    /// Gets a mutable reference to a value by its position in the key order
    pub fn get_at_mut(&mut self, pos: usize) -> Option<&mut Value> {
        let key = self.keys.get(pos)?;
        self.entries.get_mut(key)
    }

    /// Returns the key at the given position
    pub fn key_at(&self, pos: usize) -> Option<&str> {
        self.keys.get(pos).map(String::as_str)
    }

    /// Returns the key and value at the given position
    pub fn entry_at(&self, pos: usize) -> Option<(&str, &Value)> {
        let key = self.keys.get(pos)?;
        self.entries.get(key).map(|value| (key.as_str(), value))
    }

    /// Gets a value by key with automatic type conversion using TryFrom
    ///
    /// Returns `None` if the key doesn't exist or the value has another type.
    ///
    /// ```
    /// # use orderedmap::OrderedMap;
    /// let mut map = OrderedMap::new();
    /// map.set("name", "Alice");
    /// map.set("age", 30);
    ///
    /// assert_eq!(map.get_as::<&str>("name"), Some("Alice"));
    /// assert_eq!(map.get_as::<i64>("age"), Some(30));
    /// assert_eq!(map.get_as::<i64>("name"), None);
    /// assert_eq!(map.get_as::<String>("missing"), None);
    /// ```
    pub fn get_as<'a, T>(&'a self, key: &str) -> Option<T>
    where
        T: TryFrom<&'a Value, Error = MapError>,
    {
        let value = self.get(key)?;
        T::try_from(value).ok()
    }

    /// Returns the position of a key in the key order
    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.keys.iter().position(|k| k == key)
    }

    /// Sets a value, returning the previous value if the key existed.
    ///
    /// A new key is appended to the end of the order. An existing key keeps its
    /// position and only its value is replaced.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        if !self.entries.contains_key(&key) {
            self.keys.push(key.clone());
        }
        self.entries.insert(key, value.into())
    }

    /// Inserts a new key at the given position, or updates an existing one.
    ///
    /// - `-1` or any index `>= len()` appends, exactly like [`OrderedMap::set`].
    /// - Other negative indices count from the end as `len() + index + 1`,
    ///   clamped to `0`: with three keys, `-2` inserts before the last key.
    /// - If the key already exists its position is left unchanged and only the
    ///   value is replaced; the index is ignored.
    ///
    /// ```
    /// # use orderedmap::OrderedMap;
    /// let mut map: OrderedMap = [("a", 1), ("b", 2), ("c", 3)].into_iter().collect();
    ///
    /// map.set_at(-2, "x", 0);
    /// assert_eq!(map.keys(), ["a", "b", "x", "c"]);
    ///
    /// // Existing keys keep their position
    /// map.set_at(0, "c", 30);
    /// assert_eq!(map.keys(), ["a", "b", "x", "c"]);
    /// assert_eq!(map.get_as::<i64>("c"), Some(30));
    /// ```
    pub fn set_at(
        &mut self,
        index: isize,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Option<Value> {
        let key = key.into();
        let len = self.keys.len() as isize;

        if index == -1 || index >= len || self.entries.contains_key(&key) {
            return self.set(key, value);
        }

        let position = if index < 0 {
            (len + index + 1).max(0)
        } else {
            index
        };

        self.keys.insert(position as usize, key.clone());
        self.entries.insert(key, value.into());
        None
    }

    /// Removes a key, returning its value. Does nothing if the key is absent.
    pub fn delete(&mut self, key: &str) -> Option<Value> {
        let value = self.entries.remove(key)?;
        if let Some(pos) = self.index_of(key) {
            self.keys.remove(pos);
        }
        Some(value)
    }

    /// Removes the key at the given position, returning the key and value.
    ///
    /// Does nothing if `offset` is outside `0..len()`.
    pub fn delete_at(&mut self, offset: usize) -> Option<(String, Value)> {
        if offset >= self.keys.len() {
            return None;
        }
        let key = self.keys.remove(offset);
        self.entries.remove(&key).map(|value| (key, value))
    }

    /// Returns the keys in order
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Returns the values in key order
    pub fn values(&self) -> Vec<&Value> {
        self.keys
            .iter()
            .filter_map(|key| self.entries.get(key))
            .collect()
    }

    /// Returns an iterator over key-value pairs in key order
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            keys: self.keys.iter(),
            entries: &self.entries,
        }
    }

    /// Removes all keys
    pub fn clear(&mut self) {
        self.keys.clear();
        self.entries.clear();
    }
}

// Builder pattern methods
impl OrderedMap {
    /// Builder method to set a value and return self
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    /// Builder method to insert a value at a position and return self
    pub fn with_at(
        mut self,
        index: isize,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        self.set_at(index, key, value);
        self
    }
}

/// Formats the map as compact JSON in key order.
///
/// Encoding failures are logged and produce empty output instead of an error.
impl fmt::Display for OrderedMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.encode() {
            Ok(json) => f.write_str(&json),
            Err(err) => {
                tracing::warn!(error = %err, "Failed to encode map for display");
                Ok(())
            }
        }
    }
}

impl<K, V> FromIterator<(K, V)> for OrderedMap
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = OrderedMap::new();
        map.extend(iter);
        map
    }
}

impl<K, V> Extend<(K, V)> for OrderedMap
where
    K: Into<String>,
    V: Into<Value>,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

/// Borrowing iterator over an [`OrderedMap`] in key order.
pub struct Iter<'a> {
    keys: std::slice::Iter<'a, String>,
    entries: &'a HashMap<String, Value>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a String, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.keys.next()?;
        self.entries.get(key).map(|value| (key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let key = self.keys.next_back()?;
        self.entries.get(key).map(|value| (key, value))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a OrderedMap {
    type Item = (&'a String, &'a Value);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator over an [`OrderedMap`] in key order.
pub struct IntoIter {
    keys: std::vec::IntoIter<String>,
    entries: HashMap<String, Value>,
}

impl Iterator for IntoIter {
    type Item = (String, Value);

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.keys.next()?;
        self.entries.remove(&key).map(|value| (key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl ExactSizeIterator for IntoIter {}

impl IntoIterator for OrderedMap {
    type Item = (String, Value);
    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            keys: self.keys.into_iter(),
            entries: self.entries,
        }
    }
}
