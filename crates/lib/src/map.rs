//! The attribute-accessible map.
//!
//! [`AttrMap`] is the central container of this crate: an insertion-ordered
//! key-value map that additionally exposes each entry under a derived
//! attribute name. Both views address the same stored value, and every
//! mutation path keeps the entries and the name map consistent.

use std::collections::HashMap;
use std::fmt;

use indexmap::IndexMap;
use tracing::warn;

use crate::{Error, Key, Result, Value};

/// An associative container with synchronized attribute-style access.
///
/// `AttrMap` behaves like an ordinary map — membership test, get/set/remove,
/// iteration in insertion order, equality on entries — and additionally
/// resolves attribute names derived from its keys (see [`Key::attr_name`]).
/// Setting through either view updates both.
///
/// # Name collisions
///
/// Attribute derivation is many-to-one: the keys `1` and `"1"` both derive
/// `int_1`. When a new key's derived name is already claimed by a different
/// key, the name is disambiguated by appending `_1`, `_2`, … until a free
/// name is found, and a warning event is emitted through `tracing`. A key
/// that is written again keeps the name it already owns; it is never
/// renumbered.
///
/// # Thread safety
///
/// `AttrMap` has no interior locking. Mutating one instance from several
/// threads without external mutual exclusion is not supported.
///
/// # Examples
///
/// ```
/// use attrmap::AttrMap;
///
/// let mut map = AttrMap::new();
/// map.set("foo-:-bar", "baz");
///
/// assert!(*map.get("foo-:-bar").unwrap() == "baz");
/// assert!(*map.get_attr("foo_bar").unwrap() == "baz");
///
/// map.set_attr("foo_bar", "changed");
/// assert!(*map.get("foo-:-bar").unwrap() == "changed");
/// ```
#[derive(Debug, Clone, Default)]
pub struct AttrMap {
    /// Stored entries in insertion order
    entries: IndexMap<Key, Value>,
    /// Attribute name -> original key
    attrs: HashMap<String, Key>,
}

impl AttrMap {
    /// Creates a new empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a map by merging several source maps left to right.
    ///
    /// Later sources overwrite earlier ones for the same key, mirroring the
    /// merge semantics of [`AttrMap::merge`].
    ///
    /// ```
    /// use attrmap::AttrMap;
    ///
    /// let a = AttrMap::new().with("one", 1);
    /// let b = AttrMap::new().with("one", 2).with("two", 2);
    /// let merged = AttrMap::from_maps([a, b]);
    ///
    /// assert!(*merged.get("one").unwrap() == 2);
    /// assert!(*merged.get("two").unwrap() == 2);
    /// ```
    pub fn from_maps<I>(sources: I) -> Self
    where
        I: IntoIterator<Item = AttrMap>,
    {
        let mut map = AttrMap::new();
        for source in sources {
            map.merge(source);
        }
        map
    }

    /// Returns the number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Gets a value by key
    pub fn get(&self, key: impl Into<Key>) -> Option<&Value> {
        self.entries.get(&key.into())
    }

    /// Gets a mutable reference to a value by key.
    ///
    /// This is the supported path for in-place mutation of nested
    /// containers:
    ///
    /// ```
    /// use attrmap::{AttrList, AttrMap};
    ///
    /// let mut map = AttrMap::new();
    /// map.set("items", AttrList::new());
    /// map.get_mut("items")
    ///     .and_then(|v| v.as_list_mut())
    ///     .unwrap()
    ///     .push(1);
    /// ```
    pub fn get_mut(&mut self, key: impl Into<Key>) -> Option<&mut Value> {
        self.entries.get_mut(&key.into())
    }

    /// Gets a value by key, failing with [`Error::KeyNotFound`] if absent
    pub fn try_get(&self, key: impl Into<Key>) -> Result<&Value> {
        let key = key.into();
        self.entries.get(&key).ok_or_else(|| Error::KeyNotFound {
            key: key.to_string(),
        })
    }

    /// Gets a value by attribute name
    pub fn get_attr(&self, name: &str) -> Option<&Value> {
        let key = self.attrs.get(name)?;
        self.entries.get(key)
    }

    /// Gets a mutable reference to a value by attribute name
    pub fn get_attr_mut(&mut self, name: &str) -> Option<&mut Value> {
        let key = self.attrs.get(name)?.clone();
        self.entries.get_mut(&key)
    }

    /// Gets a value by attribute name, failing with [`Error::AttrNotFound`]
    /// if the name resolves to nothing
    pub fn try_get_attr(&self, name: &str) -> Result<&Value> {
        self.get_attr(name).ok_or_else(|| Error::AttrNotFound {
            attr: name.to_string(),
        })
    }

    /// Sets a value by key, returning the previous value if the key was
    /// already present.
    ///
    /// A first-time key claims an attribute name: its derived name if free
    /// (or already its own), otherwise the first free `_1`, `_2`, … suffixed
    /// variant, with a `tracing` warning naming both the colliding attribute
    /// and the key that owns it. A re-set key keeps its existing name.
    pub fn set(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        if self.attr_of(&key).is_none() {
            let attr = self.claim_attr(&key);
            self.attrs.insert(attr, key.clone());
        }
        self.entries.insert(key, value.into())
    }

    /// Sets a value by attribute name.
    ///
    /// If the name resolves to an existing key, that entry is updated;
    /// otherwise the name itself becomes a new text key. A name that is not
    /// already in derived form (one containing spaces, say) creates an entry
    /// whose attribute is the *derived* name, so it answers to
    /// `get_attr` under that form rather than the literal argument.
    pub fn set_attr(&mut self, name: &str, value: impl Into<Value>) -> Option<Value> {
        let key = match self.attrs.get(name) {
            Some(key) => key.clone(),
            None => Key::Text(name.to_string()),
        };
        self.set(key, value)
    }

    /// Removes an entry by key, returning its value if present.
    ///
    /// The entry's attribute record is removed along with it.
    pub fn remove(&mut self, key: impl Into<Key>) -> Option<Value> {
        let key = key.into();
        let old = self.entries.shift_remove(&key)?;
        self.attrs.retain(|_, owner| *owner != key);
        Some(old)
    }

    /// Removes an entry by key, failing with [`Error::KeyNotFound`] if absent
    pub fn try_remove(&mut self, key: impl Into<Key>) -> Result<Value> {
        let key = key.into();
        self.remove(&key).ok_or_else(|| Error::KeyNotFound {
            key: key.to_string(),
        })
    }

    /// Removes an entry by attribute name, failing with
    /// [`Error::AttrNotFound`] if the name resolves to nothing
    pub fn remove_attr(&mut self, name: &str) -> Result<Value> {
        let key = self
            .attrs
            .get(name)
            .cloned()
            .ok_or_else(|| Error::AttrNotFound {
                attr: name.to_string(),
            })?;
        self.try_remove(key)
    }

    /// Returns true if the argument is present as a literal key or, for text
    /// arguments, resolvable as an attribute name
    pub fn contains(&self, key: impl Into<Key>) -> bool {
        let key = key.into();
        if self.entries.contains_key(&key) {
            return true;
        }
        match key {
            Key::Text(name) => self.attrs.contains_key(&name),
            _ => false,
        }
    }

    /// Returns true if the attribute name resolves to an entry
    pub fn contains_attr(&self, name: &str) -> bool {
        self.get_attr(name).is_some()
    }

    /// Returns the attribute name currently claimed by a key
    pub fn attr_of(&self, key: &Key) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(_, owner)| *owner == key)
            .map(|(name, _)| name.as_str())
    }

    /// Returns the key that claimed an attribute name
    pub fn key_of(&self, name: &str) -> Option<&Key> {
        self.attrs.get(name)
    }

    /// Merges key-value pairs into this map, in the source's iteration
    /// order.
    ///
    /// Each pair goes through [`AttrMap::set`], so later pairs overwrite
    /// earlier ones only when they carry the same key; distinct keys with
    /// colliding attribute names disambiguate instead of clobbering each
    /// other.
    pub fn merge<I, K, V>(&mut self, source: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Key>,
        V: Into<Value>,
    {
        for (key, value) in source {
            self.set(key, value);
        }
    }

    /// Builder method to set a value and return self
    pub fn with(mut self, key: impl Into<Key>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    /// Returns an iterator over entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Value)> {
        self.entries.iter()
    }

    /// Returns an iterator over entries with mutable values
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&Key, &mut Value)> {
        self.entries.iter_mut()
    }

    /// Returns an iterator over keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.entries.keys()
    }

    /// Returns an iterator over values in insertion order
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.values()
    }

    /// Returns a mutable iterator over values
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut Value> {
        self.entries.values_mut()
    }

    /// Returns an iterator over (attribute name, key) records
    pub fn attrs(&self) -> impl Iterator<Item = (&str, &Key)> {
        self.attrs.iter().map(|(name, key)| (name.as_str(), key))
    }

    /// Removes all entries and attribute records
    pub fn clear(&mut self) {
        self.entries.clear();
        self.attrs.clear();
    }

    /// Claims an attribute name for a key that has none yet.
    ///
    /// Precondition: `key` owns no record in `attrs`.
    fn claim_attr(&self, key: &Key) -> String {
        let candidate = key.attr_name();
        let Some(owner) = self.attrs.get(&candidate) else {
            return candidate;
        };
        let mut n = 1usize;
        loop {
            let probe = format!("{candidate}_{n}");
            if !self.attrs.contains_key(&probe) {
                warn!(
                    key = %key,
                    attribute = %probe,
                    wanted = %candidate,
                    claimed_by = %owner,
                    "attribute name collision, key mapped to suffixed attribute"
                );
                return probe;
            }
            n += 1;
        }
    }
}

/// Equality compares entries only, regardless of insertion order. Attribute
/// records are derived state and never participate.
impl PartialEq for AttrMap {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for AttrMap {}

impl fmt::Display for AttrMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        let mut first = true;
        for (key, value) in self.iter() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{key}: {value}")?;
            first = false;
        }
        write!(f, "}}")
    }
}

impl<K: Into<Key>, V: Into<Value>> FromIterator<(K, V)> for AttrMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = AttrMap::new();
        map.merge(iter);
        map
    }
}

impl<K: Into<Key>, V: Into<Value>> Extend<(K, V)> for AttrMap {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        self.merge(iter);
    }
}

impl IntoIterator for AttrMap {
    type Item = (Key, Value);
    type IntoIter = indexmap::map::IntoIter<Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a AttrMap {
    type Item = (&'a Key, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
