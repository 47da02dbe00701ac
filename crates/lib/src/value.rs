//! Value types for attribute-accessible containers.
//!
//! This module provides the Value enum that represents everything that can be
//! stored in an [`AttrMap`]. Values are either leaf scalars or containers
//! (nested maps, lists, sets, tuples), and the container variants are the
//! self-wrapping types from this crate, so attribute access works at every
//! depth.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem::discriminant;

use crate::{AttrList, AttrMap, AttrSet, Error};

/// A value stored in an attribute-accessible container.
///
/// # Value Types
///
/// ## Leaf values
/// - [`Value::Null`] - null/empty values
/// - [`Value::Bool`] - booleans
/// - [`Value::Int`] - 64-bit signed integers
/// - [`Value::Float`] - 64-bit floats
/// - [`Value::Text`] - UTF-8 strings
///
/// ## Container values
/// - [`Value::Map`] - a nested [`AttrMap`]
/// - [`Value::List`] - an ordered [`AttrList`]
/// - [`Value::Set`] - an unordered [`AttrSet`]
/// - [`Value::Tuple`] - a fixed-arity ordered group of values
///
/// # Direct comparisons
///
/// `Value` implements `PartialEq` against primitive types for ergonomic
/// assertions:
///
/// ```
/// # use attrmap::Value;
/// let text = Value::Text("hello".to_string());
/// let number = Value::Int(42);
///
/// assert!(text == "hello");
/// assert!(number == 42);
/// assert!(42 == number);
/// assert!(!(text == 42));
/// ```
///
/// # Equality and hashing
///
/// Floats compare and hash by bit pattern, which makes `Value` usable as a
/// set element. Container variants hash only their kind and length; equal
/// containers always produce equal hashes, but containers inside sets hash
/// coarsely.
#[derive(Debug, Clone)]
pub enum Value {
    /// Null/empty value
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// Text string value
    Text(String),
    /// Nested attribute-accessible map
    Map(AttrMap),
    /// Ordered self-wrapping sequence
    List(AttrList),
    /// Unordered self-wrapping collection
    Set(AttrSet),
    /// Fixed-arity ordered group, rebuilt element-by-element on construction
    Tuple(Vec<Value>),
}

impl Value {
    /// Returns true if this is a leaf value (not a container)
    pub fn is_leaf(&self) -> bool {
        !self.is_container()
    }

    /// Returns true if this is a container value
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            Value::Map(_) | Value::List(_) | Value::Set(_) | Value::Tuple(_)
        )
    }

    /// Returns true if this is a null value
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
            Value::Map(_) => "map",
            Value::List(_) => "list",
            Value::Set(_) => "set",
            Value::Tuple(_) => "tuple",
        }
    }

    /// Attempts to convert to a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to convert to an integer
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to convert to a float
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Attempts to convert to a string
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to convert to a map (immutable reference)
    pub fn as_map(&self) -> Option<&AttrMap> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Attempts to convert to a mutable map reference
    pub fn as_map_mut(&mut self) -> Option<&mut AttrMap> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Attempts to convert to a list (immutable reference)
    pub fn as_list(&self) -> Option<&AttrList> {
        match self {
            Value::List(list) => Some(list),
            _ => None,
        }
    }

    /// Attempts to convert to a mutable list reference
    pub fn as_list_mut(&mut self) -> Option<&mut AttrList> {
        match self {
            Value::List(list) => Some(list),
            _ => None,
        }
    }

    /// Attempts to convert to a set (immutable reference)
    pub fn as_set(&self) -> Option<&AttrSet> {
        match self {
            Value::Set(set) => Some(set),
            _ => None,
        }
    }

    /// Attempts to convert to a mutable set reference
    pub fn as_set_mut(&mut self) -> Option<&mut AttrSet> {
        match self {
            Value::Set(set) => Some(set),
            _ => None,
        }
    }

    /// Attempts to convert to a tuple slice
    pub fn as_tuple(&self) -> Option<&[Value]> {
        match self {
            Value::Tuple(items) => Some(items),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a.to_bits() == b.to_bits(),
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Set(a), Value::Set(b)) => a == b,
            (Value::Tuple(a), Value::Tuple(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        discriminant(self).hash(state);
        match self {
            Value::Null => {}
            Value::Bool(b) => b.hash(state),
            Value::Int(n) => n.hash(state),
            Value::Float(f) => f.to_bits().hash(state),
            Value::Text(s) => s.hash(state),
            // Containers hash by length only; consistent with Eq since
            // equal containers have equal lengths.
            Value::Map(m) => m.len().hash(state),
            Value::List(l) => l.len().hash(state),
            Value::Set(s) => s.len().hash(state),
            Value::Tuple(t) => t.len().hash(state),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Text(s) => write!(f, "{s}"),
            Value::Map(map) => write!(f, "{map}"),
            Value::List(list) => write!(f, "{list}"),
            Value::Set(set) => write!(f, "{set}"),
            Value::Tuple(items) => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, ")")
            }
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}

// Convenient From implementations for common types
impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(value as f64)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<AttrMap> for Value {
    fn from(value: AttrMap) -> Self {
        Value::Map(value)
    }
}

impl From<AttrList> for Value {
    fn from(value: AttrList) -> Self {
        Value::List(value)
    }
}

impl From<AttrSet> for Value {
    fn from(value: AttrSet) -> Self {
        Value::Set(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::List(value.into_iter().collect())
    }
}

impl<A: Into<Value>, B: Into<Value>> From<(A, B)> for Value {
    fn from((a, b): (A, B)) -> Self {
        Value::Tuple(vec![a.into(), b.into()])
    }
}

impl<A: Into<Value>, B: Into<Value>, C: Into<Value>> From<(A, B, C)> for Value {
    fn from((a, b, c): (A, B, C)) -> Self {
        Value::Tuple(vec![a.into(), b.into(), c.into()])
    }
}

impl From<&Value> for Value {
    fn from(value: &Value) -> Self {
        value.clone()
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

// TryFrom implementations for typed extraction
impl TryFrom<&Value> for String {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Text(s) => Ok(s.clone()),
            _ => Err(Error::TypeMismatch {
                expected: "text".to_string(),
                actual: value.type_name().to_string(),
            }),
        }
    }
}

impl<'a> TryFrom<&'a Value> for &'a str {
    type Error = Error;

    fn try_from(value: &'a Value) -> Result<Self, Self::Error> {
        match value {
            Value::Text(s) => Ok(s),
            _ => Err(Error::TypeMismatch {
                expected: "text".to_string(),
                actual: value.type_name().to_string(),
            }),
        }
    }
}

impl TryFrom<&Value> for i64 {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Int(n) => Ok(*n),
            _ => Err(Error::TypeMismatch {
                expected: "int".to_string(),
                actual: value.type_name().to_string(),
            }),
        }
    }
}

impl TryFrom<&Value> for f64 {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Float(x) => Ok(*x),
            _ => Err(Error::TypeMismatch {
                expected: "float".to_string(),
                actual: value.type_name().to_string(),
            }),
        }
    }
}

impl TryFrom<&Value> for bool {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Bool(b) => Ok(*b),
            _ => Err(Error::TypeMismatch {
                expected: "bool".to_string(),
                actual: value.type_name().to_string(),
            }),
        }
    }
}

impl TryFrom<&Value> for AttrMap {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Map(map) => Ok(map.clone()),
            _ => Err(Error::TypeMismatch {
                expected: "map".to_string(),
                actual: value.type_name().to_string(),
            }),
        }
    }
}

impl TryFrom<&Value> for AttrList {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::List(list) => Ok(list.clone()),
            _ => Err(Error::TypeMismatch {
                expected: "list".to_string(),
                actual: value.type_name().to_string(),
            }),
        }
    }
}

// PartialEq implementations for comparing Value with other types
impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        match self {
            Value::Text(s) => s == other,
            _ => false,
        }
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<String> for Value {
    fn eq(&self, other: &String) -> bool {
        match self {
            Value::Text(s) => s == other,
            _ => false,
        }
    }
}

impl PartialEq<i64> for Value {
    fn eq(&self, other: &i64) -> bool {
        match self {
            Value::Int(n) => n == other,
            _ => false,
        }
    }
}

impl PartialEq<i32> for Value {
    fn eq(&self, other: &i32) -> bool {
        match self {
            Value::Int(n) => *n == *other as i64,
            _ => false,
        }
    }
}

impl PartialEq<f64> for Value {
    fn eq(&self, other: &f64) -> bool {
        match self {
            Value::Float(x) => x.to_bits() == other.to_bits(),
            _ => false,
        }
    }
}

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        match self {
            Value::Bool(b) => b == other,
            _ => false,
        }
    }
}

// Reverse implementations for symmetry
impl PartialEq<Value> for str {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for &str {
    fn eq(&self, other: &Value) -> bool {
        other == *self
    }
}

impl PartialEq<Value> for String {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for i64 {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for i32 {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for f64 {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for bool {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}
