//! Ordered self-wrapping sequence.

use std::fmt;
use std::ops::Index;

use crate::{Error, Result, Value};

/// An ordered sequence of [`Value`]s.
///
/// Every insertion path — [`push`](AttrList::push),
/// [`insert`](AttrList::insert), [`set`](AttrList::set), `extend`, and
/// collection from an iterator — accepts anything convertible into a
/// [`Value`], so nested maps and sequences stored through a list keep their
/// attribute-access behavior.
///
/// # Examples
///
/// ```
/// use attrmap::{AttrList, AttrMap};
///
/// let mut list = AttrList::new();
/// list.push("hi");
/// list.push(AttrMap::new().with("foo", "bar"));
///
/// assert_eq!(list.len(), 2);
/// assert!(*list.get(1).unwrap().as_map().unwrap().get_attr("foo").unwrap() == "bar");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttrList {
    items: Vec<Value>,
}

impl AttrList {
    /// Creates a new empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of items in the list
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the list is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends a value to the end of the list
    pub fn push(&mut self, value: impl Into<Value>) {
        self.items.push(value.into());
    }

    /// Inserts a value before the given index.
    ///
    /// Fails with [`Error::IndexOutOfBounds`] if `index > len`.
    pub fn insert(&mut self, index: usize, value: impl Into<Value>) -> Result<()> {
        let len = self.len();
        if index > len {
            return Err(Error::IndexOutOfBounds { index, len });
        }
        self.items.insert(index, value.into());
        Ok(())
    }

    /// Gets a value by index
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    /// Gets a mutable reference to a value by index
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.items.get_mut(index)
    }

    /// Replaces the value at an index, returning the old value.
    ///
    /// Returns `None` (and stores nothing) if the index is out of range.
    pub fn set(&mut self, index: usize, value: impl Into<Value>) -> Option<Value> {
        let slot = self.items.get_mut(index)?;
        Some(std::mem::replace(slot, value.into()))
    }

    /// Removes and returns the value at an index, shifting later items left
    pub fn remove(&mut self, index: usize) -> Option<Value> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    /// Returns an iterator over the values in order
    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        self.items.iter()
    }

    /// Returns a mutable iterator over the values in order
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Value> {
        self.items.iter_mut()
    }

    /// Clears all items from the list
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Converts to a Vec of values
    pub fn to_vec(&self) -> Vec<Value> {
        self.items.clone()
    }
}

impl fmt::Display for AttrList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "]")
    }
}

impl Index<usize> for AttrList {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        &self.items[index]
    }
}

impl<V: Into<Value>> FromIterator<V> for AttrList {
    fn from_iter<T: IntoIterator<Item = V>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<V: Into<Value>> Extend<V> for AttrList {
    fn extend<T: IntoIterator<Item = V>>(&mut self, iter: T) {
        self.items.extend(iter.into_iter().map(Into::into));
    }
}

impl<V: Into<Value>> From<Vec<V>> for AttrList {
    fn from(items: Vec<V>) -> Self {
        items.into_iter().collect()
    }
}

impl IntoIterator for AttrList {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a AttrList {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
