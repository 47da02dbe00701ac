//! Hook interface for intercepting map operations.
//!
//! [`MapHooks`] is a capability trait with no-op defaults: implementors
//! override only the interception points they need, and a [`HookedMap`]
//! routes every operation through them. The autosave persistence layer is
//! built on this interface (see [`crate::autosave`]).

use std::ops::Deref;

use crate::{AttrMap, Error, Key, Result, Value};

/// Interception points around map reads, writes, and deletions.
///
/// All methods receive a reference to the map *as the hook runs*: `on_*`
/// hooks see the map before the operation commits, `after_*` hooks see it
/// after. Every method has a no-op default.
pub trait MapHooks {
    /// Called before a value is read. Side effect only.
    fn on_get(&mut self, _map: &AttrMap, _key: &Key) {}

    /// Called after a value is read; the return value replaces the result.
    fn after_get(&mut self, _map: &AttrMap, _key: &Key, value: Value) -> Value {
        value
    }

    /// Called before a value is written; the return value is what gets
    /// stored.
    fn on_set(&mut self, _map: &AttrMap, _key: &Key, value: Value) -> Value {
        value
    }

    /// Called after a value is written. May fail, e.g. when a write-through
    /// store cannot persist.
    fn after_set(&mut self, _map: &AttrMap, _key: &Key) -> Result<()> {
        Ok(())
    }

    /// Called before an entry is deleted. Returning false vetoes the
    /// deletion: the entry is retained and [`MapHooks::after_del`] does not
    /// run.
    fn on_del(&mut self, _map: &AttrMap, _key: &Key) -> bool {
        true
    }

    /// Called after an entry was deleted.
    fn after_del(&mut self, _map: &AttrMap, _key: &Key) -> Result<()> {
        Ok(())
    }
}

/// No-op hook set.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHooks;

impl MapHooks for NoHooks {}

/// An [`AttrMap`] paired with a [`MapHooks`] implementation.
///
/// Mutations and hooked reads go through the wrapper's own methods; plain
/// read access is available through `Deref`. Only the outermost container
/// carries hooks — nested maps reached through stored values are ordinary
/// [`AttrMap`]s.
#[derive(Debug, Clone)]
pub struct HookedMap<H: MapHooks> {
    map: AttrMap,
    hooks: H,
}

impl<H: MapHooks> HookedMap<H> {
    /// Wraps a map with a hook set
    pub fn new(map: AttrMap, hooks: H) -> Self {
        Self { map, hooks }
    }

    /// Reads a value by key through the hooks.
    ///
    /// Runs `on_get`, resolves the entry (failing with
    /// [`Error::KeyNotFound`]), then returns whatever `after_get` makes of
    /// the stored value.
    pub fn get(&mut self, key: impl Into<Key>) -> Result<Value> {
        let key = key.into();
        self.hooks.on_get(&self.map, &key);
        let value = self.map.try_get(&key)?.clone();
        Ok(self.hooks.after_get(&self.map, &key, value))
    }

    /// Reads a value by attribute name through the hooks
    pub fn get_attr(&mut self, name: &str) -> Result<Value> {
        let key = self
            .map
            .key_of(name)
            .cloned()
            .ok_or_else(|| Error::AttrNotFound {
                attr: name.to_string(),
            })?;
        self.get(key)
    }

    /// Writes a value by key through the hooks.
    ///
    /// The value stored is whatever `on_set` returns; `after_set` runs once
    /// the entry is committed and may fail. Returns the replaced value, if
    /// any.
    pub fn set(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Result<Option<Value>> {
        let key = key.into();
        let value = self.hooks.on_set(&self.map, &key, value.into());
        let old = self.map.set(key.clone(), value);
        self.hooks.after_set(&self.map, &key)?;
        Ok(old)
    }

    /// Writes a value by attribute name through the hooks.
    ///
    /// An unresolvable name becomes a new text key, as with
    /// [`AttrMap::set_attr`].
    pub fn set_attr(&mut self, name: &str, value: impl Into<Value>) -> Result<Option<Value>> {
        let key = match self.map.key_of(name) {
            Some(key) => key.clone(),
            None => Key::Text(name.to_string()),
        };
        self.set(key, value)
    }

    /// Deletes an entry by key through the hooks.
    ///
    /// Fails with [`Error::KeyNotFound`] if the key is absent. If `on_del`
    /// vetoes, the entry is retained, `after_del` does not run, and `None`
    /// is returned; otherwise the removed value is returned.
    pub fn remove(&mut self, key: impl Into<Key>) -> Result<Option<Value>> {
        let key = key.into();
        if self.map.get(&key).is_none() {
            return Err(Error::KeyNotFound {
                key: key.to_string(),
            });
        }
        if !self.hooks.on_del(&self.map, &key) {
            return Ok(None);
        }
        let old = self.map.remove(&key);
        self.hooks.after_del(&self.map, &key)?;
        Ok(old)
    }

    /// Deletes an entry by attribute name through the hooks
    pub fn remove_attr(&mut self, name: &str) -> Result<Option<Value>> {
        let key = self
            .map
            .key_of(name)
            .cloned()
            .ok_or_else(|| Error::AttrNotFound {
                attr: name.to_string(),
            })?;
        self.remove(key)
    }

    /// Merges key-value pairs through the hooks, one [`HookedMap::set`] per
    /// pair in iteration order
    pub fn merge<I, K, V>(&mut self, source: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Key>,
        V: Into<Value>,
    {
        for (key, value) in source {
            self.set(key, value)?;
        }
        Ok(())
    }

    /// Plain access to the wrapped map
    pub fn map(&self) -> &AttrMap {
        &self.map
    }

    /// Mutable access to the wrapped map, bypassing the hooks
    pub fn map_mut(&mut self) -> &mut AttrMap {
        &mut self.map
    }

    /// Access to the hook set
    pub fn hooks(&self) -> &H {
        &self.hooks
    }

    /// Mutable access to the hook set
    pub fn hooks_mut(&mut self) -> &mut H {
        &mut self.hooks
    }

    /// Unwraps into the map and the hook set
    pub fn into_parts(self) -> (AttrMap, H) {
        (self.map, self.hooks)
    }
}

impl<H: MapHooks> Deref for HookedMap<H> {
    type Target = AttrMap;

    fn deref(&self) -> &AttrMap {
        &self.map
    }
}
