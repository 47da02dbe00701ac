//! Unordered self-wrapping collection.

use std::fmt;

use indexmap::IndexSet;

use crate::Value;

/// A collection of unique [`Value`]s.
///
/// Insertion paths accept anything convertible into a [`Value`]; `extend`
/// wraps element by element, so nested containers added through a set behave
/// like those stored anywhere else in the crate. Iteration follows insertion
/// order, but equality ignores it.
///
/// ```
/// use attrmap::AttrSet;
///
/// let mut set = AttrSet::new();
/// set.insert("hi");
/// set.insert(1);
/// set.insert(1); // duplicate, ignored
///
/// assert_eq!(set.len(), 2);
/// assert!(set.contains(1));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttrSet {
    items: IndexSet<Value>,
}

impl AttrSet {
    /// Creates a new empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of values in the set
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the set is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds a value, returning true if it was not already present
    pub fn insert(&mut self, value: impl Into<Value>) -> bool {
        self.items.insert(value.into())
    }

    /// Returns true if the set contains the value
    pub fn contains(&self, value: impl Into<Value>) -> bool {
        self.items.contains(&value.into())
    }

    /// Removes a value, returning true if it was present
    pub fn remove(&mut self, value: impl Into<Value>) -> bool {
        self.items.shift_remove(&value.into())
    }

    /// Returns an iterator over the values in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        self.items.iter()
    }

    /// Clears all values from the set
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl fmt::Display for AttrSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "}}")
    }
}

impl<V: Into<Value>> FromIterator<V> for AttrSet {
    fn from_iter<T: IntoIterator<Item = V>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<V: Into<Value>> Extend<V> for AttrSet {
    fn extend<T: IntoIterator<Item = V>>(&mut self, iter: T) {
        self.items.extend(iter.into_iter().map(Into::into));
    }
}

impl IntoIterator for AttrSet {
    type Item = Value;
    type IntoIter = indexmap::set::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a AttrSet {
    type Item = &'a Value;
    type IntoIter = indexmap::set::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
