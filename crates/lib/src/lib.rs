//! attrmap: an associative container with synchronized attribute-style access.
//!
//! An [`AttrMap`] behaves like an ordinary key-value map (membership tests,
//! get/set/remove, iteration, equality) while also exposing every entry under a
//! derived attribute name, so `map.get("some key")` and
//! `map.get_attr("some_key")` resolve to the same stored value and stay in
//! sync through every mutation.
//!
//! ## Core concepts
//!
//! * **Keys ([`Key`])**: a closed set of key types — text, integers, booleans,
//!   and null. Every key has a deterministic attribute name derived from its
//!   display form (see [`Key::attr_name`]).
//! * **Values ([`Value`])**: a tagged tree of scalars and containers. Nested
//!   maps are [`AttrMap`]s, ordered sequences are [`AttrList`]s, unordered
//!   collections are [`AttrSet`]s, so attribute access is available at every
//!   depth of a stored structure.
//! * **Name map**: each `AttrMap` maintains a bidirectional lookup between
//!   attribute names and original keys. Two distinct keys that derive the same
//!   attribute name are disambiguated with `_1`, `_2`, … suffixes.
//! * **Hooks ([`MapHooks`])**: an optional capability interface for
//!   intercepting reads, writes, and deletions, used by [`AutosaveMap`] to
//!   implement write-through persistence.
//! * **Persistence ([`AutosaveMap`])**: a map bound to a JSON file that can
//!   reload from disk and, when autosave is enabled, rewrites the file after
//!   every successful write.
//!
//! ## Thread safety
//!
//! All containers in this crate are plain single-threaded data structures with
//! no interior locking. Sharing one instance across threads requires external
//! mutual exclusion.
//!
//! ## Example
//!
//! ```
//! use attrmap::AttrMap;
//!
//! let mut map = AttrMap::new();
//! map.set("best pony", "Littlepip");
//! map.set(2, "heya");
//!
//! assert!(*map.get_attr("best_pony").unwrap() == "Littlepip");
//! assert!(*map.get_attr("int_2").unwrap() == "heya");
//! assert!(*map.get(2).unwrap() == "heya");
//! ```

pub mod autosave;
pub mod hooks;
pub mod json;
pub mod key;
pub mod list;
pub mod map;
pub mod set;
pub mod value;

pub use autosave::{AutosaveMap, AutosaveMapBuilder};
pub use hooks::{HookedMap, MapHooks, NoHooks};
pub use key::Key;
pub use list::AttrList;
pub use map::AttrMap;
pub use set::AttrSet;
pub use value::Value;

/// Result type used throughout the attrmap library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the attrmap library.
///
/// Failures surface as distinct, catchable conditions so calling code can
/// branch on "not found" vs "bad input" vs "I/O problem" without string
/// matching.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A key lookup failed.
    #[error("key not found: {key}")]
    KeyNotFound { key: String },

    /// An attribute-name lookup failed.
    #[error("attribute not found: {attr}")]
    AttrNotFound { attr: String },

    /// An argument had the wrong shape for the operation.
    #[error("type mismatch: expected {expected}, found {actual}")]
    TypeMismatch { expected: String, actual: String },

    /// A sequence index was outside the valid range.
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// File I/O failed during persistence.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization or parsing failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Check if this error indicates a missing key or attribute.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::KeyNotFound { .. } | Error::AttrNotFound { .. }
        )
    }

    /// Check if this error indicates a badly shaped argument.
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Error::TypeMismatch { .. })
    }

    /// Check if this error originated in file I/O.
    pub fn is_io(&self) -> bool {
        matches!(self, Error::Io(_))
    }

    /// Check if this error originated in JSON encoding or decoding.
    pub fn is_json(&self) -> bool {
        matches!(self, Error::Json(_))
    }
}
