//! JSON file persistence for attribute-accessible maps.
//!
//! An [`AutosaveMap`] is an [`AttrMap`] bound to a JSON file. On open it can
//! merge the file's contents over configured defaults; afterwards, while
//! autosave is enabled, every successful write rewrites the file. The file
//! format is a plain JSON object with sorted keys and 4-space indentation —
//! nothing crate-specific appears in the output.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, warn};

use crate::hooks::{HookedMap, MapHooks};
use crate::{AttrMap, Error, Key, Result, Value};

/// Write-through hook set: stores the whole map after every write while
/// autosave is enabled.
#[derive(Debug, Clone)]
struct AutosaveHooks {
    path: PathBuf,
    autosave: bool,
}

impl MapHooks for AutosaveHooks {
    fn after_set(&mut self, map: &AttrMap, _key: &Key) -> Result<()> {
        if self.autosave {
            write_map(map, &self.path)?;
        }
        Ok(())
    }

    fn after_del(&mut self, map: &AttrMap, _key: &Key) -> Result<()> {
        if self.autosave {
            write_map(map, &self.path)?;
        }
        Ok(())
    }
}

/// Serializes a map to a file as JSON: sorted keys, 4-space indentation.
/// Missing parent directories are created first.
fn write_map(map: &AttrMap, path: &Path) -> Result<()> {
    debug!(path = %path.display(), "saving map");
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }

    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    map.to_json().serialize(&mut serializer)?;
    fs::write(path, buf)?;
    debug!(path = %path.display(), "saved map");
    Ok(())
}

/// An [`AttrMap`] persisted to a JSON file.
///
/// Read access goes through `Deref<Target = AttrMap>`; mutations go through
/// the wrapper's own methods so the write-through hooks can run. As with
/// [`HookedMap`], only the top-level container is hooked: mutating a nested
/// value in place (via [`AttrMap::get_mut`] on the inner map) does not
/// trigger an autosave; call [`AutosaveMap::store`] afterwards.
///
/// # Examples
///
/// ```no_run
/// use attrmap::AutosaveMap;
///
/// let mut config = AutosaveMap::open("config.json")?;
/// config.set("volume", 7)?; // config.json rewritten
/// # Ok::<(), attrmap::Error>(())
/// ```
#[derive(Debug)]
pub struct AutosaveMap {
    inner: HookedMap<AutosaveHooks>,
}

impl AutosaveMap {
    /// Opens a map over a JSON file with default settings: load immediately,
    /// autosave enabled, no defaults.
    ///
    /// A missing file is not an error — the map starts empty and the file
    /// appears on the first write.
    pub fn open(file: impl Into<PathBuf>) -> Result<Self> {
        Self::builder(file).open()
    }

    /// Starts building a map over a JSON file
    pub fn builder(file: impl Into<PathBuf>) -> AutosaveMapBuilder {
        AutosaveMapBuilder {
            file: file.into(),
            dir: None,
            autosave: true,
            load: true,
            defaults: None,
        }
    }

    /// The file this map persists to
    pub fn path(&self) -> &Path {
        &self.inner.hooks().path
    }

    /// Returns true if writes currently trigger an automatic store
    pub fn autosave(&self) -> bool {
        self.inner.hooks().autosave
    }

    /// Toggles whether every successful write triggers a store
    pub fn enable_autosave(&mut self, enabled: bool) {
        self.inner.hooks_mut().autosave = enabled;
    }

    /// Serializes the whole map to the target file.
    ///
    /// Keys are sorted, indentation is 4 spaces, and missing parent
    /// directories are created first.
    pub fn store(&self) -> Result<()> {
        write_map(self.inner.map(), &self.inner.hooks().path)
    }

    /// Reads and parses the target file, replacing or merging the current
    /// entries.
    ///
    /// With `merge == false` all existing entries and attribute records are
    /// cleared first; with `merge == true` the file's members overwrite
    /// matching keys and leave the rest alone. The file's root must be a
    /// JSON object ([`Error::TypeMismatch`] otherwise); a missing or
    /// unreadable file fails with [`Error::Io`].
    pub fn load(&mut self, merge: bool) -> Result<()> {
        let path = self.inner.hooks().path.clone();
        debug!(path = %path.display(), merge, "loading map");
        let text = fs::read_to_string(&path)?;
        let json: serde_json::Value = serde_json::from_str(&text)?;
        let map = self.inner.map_mut();
        if !merge {
            map.clear();
        }
        map.merge_json(json)
    }

    /// Writes a value by key; stores the file afterwards if autosave is
    /// enabled
    pub fn set(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Result<Option<Value>> {
        self.inner.set(key, value)
    }

    /// Writes a value by attribute name; stores afterwards if autosave is
    /// enabled
    pub fn set_attr(&mut self, name: &str, value: impl Into<Value>) -> Result<Option<Value>> {
        self.inner.set_attr(name, value)
    }

    /// Deletes an entry by key; stores afterwards if autosave is enabled
    pub fn remove(&mut self, key: impl Into<Key>) -> Result<Option<Value>> {
        self.inner.remove(key)
    }

    /// Deletes an entry by attribute name; stores afterwards if autosave is
    /// enabled
    pub fn remove_attr(&mut self, name: &str) -> Result<Option<Value>> {
        self.inner.remove_attr(name)
    }

    /// Merges key-value pairs, then stores once if autosave is enabled.
    ///
    /// Unlike [`HookedMap::merge`] this does not rewrite the file per pair.
    pub fn merge<I, K, V>(&mut self, source: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Key>,
        V: Into<Value>,
    {
        self.inner.map_mut().merge(source);
        if self.autosave() {
            self.store()?;
        }
        Ok(())
    }

    /// Unwraps into the plain map, dropping the file binding
    pub fn into_map(self) -> AttrMap {
        self.inner.into_parts().0
    }
}

impl std::ops::Deref for AutosaveMap {
    type Target = AttrMap;

    fn deref(&self) -> &AttrMap {
        self.inner.map()
    }
}

/// Builder for [`AutosaveMap`], configuring the target file, autosave
/// behavior, initial load, and default values.
#[derive(Debug)]
pub struct AutosaveMapBuilder {
    file: PathBuf,
    dir: Option<PathBuf>,
    autosave: bool,
    load: bool,
    defaults: Option<AttrMap>,
}

impl AutosaveMapBuilder {
    /// Directory the file lives in; joined with the file name on open
    pub fn dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = Some(dir.into());
        self
    }

    /// Whether writes trigger an automatic store (default true)
    pub fn autosave(mut self, enabled: bool) -> Self {
        self.autosave = enabled;
        self
    }

    /// Whether to read the file on open (default true)
    pub fn load(mut self, load: bool) -> Self {
        self.load = load;
        self
    }

    /// Default entries, merged before the file is loaded.
    ///
    /// Values loaded from the file overwrite defaults with the same key.
    pub fn defaults(mut self, defaults: AttrMap) -> Self {
        self.defaults = Some(defaults);
        self
    }

    /// Opens the map.
    ///
    /// Merges defaults first, then — when loading is enabled — merges the
    /// file's contents over them. A missing file is tolerated here (the map
    /// starts from the defaults); any other read or parse failure
    /// propagates.
    pub fn open(self) -> Result<AutosaveMap> {
        let path = match self.dir {
            Some(dir) => dir.join(self.file),
            None => self.file,
        };

        let mut map = AttrMap::new();
        if let Some(defaults) = self.defaults {
            map.merge(defaults);
        }

        let mut opened = AutosaveMap {
            inner: HookedMap::new(
                map,
                AutosaveHooks {
                    path,
                    autosave: self.autosave,
                },
            ),
        };

        if self.load {
            match opened.load(true) {
                Err(Error::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                    warn!(
                        path = %opened.path().display(),
                        "data file not found, starting with no loaded data"
                    );
                }
                other => other?,
            }
        }

        Ok(opened)
    }
}
