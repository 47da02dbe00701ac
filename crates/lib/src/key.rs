//! Key types and attribute name derivation.
//!
//! Maps in this crate accept more than text keys: integers, booleans, and
//! null are all valid. Every key deterministically derives an attribute name
//! (a valid identifier string) used for attribute-style access.

use std::fmt;

/// A map key.
///
/// `Key` is a closed set of the key types an [`AttrMap`](crate::AttrMap)
/// accepts. `From` implementations cover the common cases so call sites can
/// pass `&str`, `String`, integers, or `bool` directly.
///
/// # Display form
///
/// The `Display` implementation yields the form attribute names are derived
/// from: `Null` renders as `None` and booleans render capitalized
/// (`True`/`False`), matching the derived names `data_None`, `data_True`,
/// and `data_False`.
///
/// ```
/// use attrmap::Key;
///
/// assert_eq!(Key::from("name").to_string(), "name");
/// assert_eq!(Key::from(7).to_string(), "7");
/// assert_eq!(Key::from(false).to_string(), "False");
/// assert_eq!(Key::Null.to_string(), "None");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// Null key
    Null,
    /// Boolean key
    Bool(bool),
    /// Integer key
    Int(i64),
    /// Text key
    Text(String),
}

impl Key {
    /// Derives the attribute name for this key.
    ///
    /// The derivation is pure and deterministic:
    ///
    /// 1. Start from the key's display form.
    /// 2. If the first character is a decimal digit, prepend `int_`.
    /// 3. Otherwise, if the key is not text, prepend `data_`.
    /// 4. Replace every maximal run of characters outside
    ///    `[A-Za-z0-9_]` with a single underscore.
    ///
    /// The mapping is many-to-one: distinct keys may derive the same name.
    /// Disambiguation between colliding keys is the map's responsibility,
    /// not the normalizer's.
    ///
    /// # Examples
    ///
    /// ```
    /// use attrmap::Key;
    ///
    /// assert_eq!(Key::from("test123-456.7").attr_name(), "test123_456_7");
    /// assert_eq!(Key::from(2).attr_name(), "int_2");
    /// assert_eq!(Key::from("2abc345").attr_name(), "int_2abc345");
    /// assert_eq!(Key::from(false).attr_name(), "data_False");
    /// assert_eq!(Key::Null.attr_name(), "data_None");
    /// assert_eq!(Key::from("foo-2.4;\"").attr_name(), "foo_2_4_");
    /// ```
    pub fn attr_name(&self) -> String {
        let display = self.to_string();
        let prefixed = if display
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_digit())
        {
            format!("int_{display}")
        } else if !matches!(self, Key::Text(_)) {
            format!("data_{display}")
        } else {
            display
        };

        // Collapse each run of disallowed characters into one underscore.
        let mut name = String::with_capacity(prefixed.len());
        let mut in_run = false;
        for c in prefixed.chars() {
            if c.is_ascii_alphanumeric() || c == '_' {
                name.push(c);
                in_run = false;
            } else if !in_run {
                name.push('_');
                in_run = true;
            }
        }
        name
    }

    /// Returns the string form used as a JSON object key by the persistence
    /// layer: text verbatim, integers in decimal, `true`/`false` for
    /// booleans, and `null` for the null key.
    pub fn as_json_key(&self) -> String {
        match self {
            Key::Null => "null".to_string(),
            Key::Bool(b) => b.to_string(),
            Key::Int(n) => n.to_string(),
            Key::Text(s) => s.clone(),
        }
    }

    /// Returns true if this is a text key.
    pub fn is_text(&self) -> bool {
        matches!(self, Key::Text(_))
    }

    /// Attempts to view this key as text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Key::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Null => write!(f, "None"),
            Key::Bool(true) => write!(f, "True"),
            Key::Bool(false) => write!(f, "False"),
            Key::Int(n) => write!(f, "{n}"),
            Key::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key::Text(value.to_string())
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Key::Text(value)
    }
}

impl From<&String> for Key {
    fn from(value: &String) -> Self {
        Key::Text(value.clone())
    }
}

impl From<i64> for Key {
    fn from(value: i64) -> Self {
        Key::Int(value)
    }
}

impl From<i32> for Key {
    fn from(value: i32) -> Self {
        Key::Int(value as i64)
    }
}

impl From<u32> for Key {
    fn from(value: u32) -> Self {
        Key::Int(value as i64)
    }
}

impl From<bool> for Key {
    fn from(value: bool) -> Self {
        Key::Bool(value)
    }
}

impl From<()> for Key {
    fn from(_: ()) -> Self {
        Key::Null
    }
}

impl From<&Key> for Key {
    fn from(value: &Key) -> Self {
        value.clone()
    }
}
