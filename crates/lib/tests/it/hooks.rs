//! Tests for the hook interception points.

use attrmap::{AttrMap, HookedMap, Key, MapHooks, NoHooks, Value};

/// Records every interception point it sees and applies a visible
/// transformation at each one that can.
#[derive(Debug, Default)]
struct Recorder {
    calls: Vec<String>,
    veto_deletes: bool,
}

impl MapHooks for Recorder {
    fn on_get(&mut self, _map: &AttrMap, key: &Key) {
        self.calls.push(format!("on_get {key}"));
    }

    fn after_get(&mut self, _map: &AttrMap, key: &Key, value: Value) -> Value {
        self.calls.push(format!("after_get {key}"));
        match value {
            Value::Int(n) => Value::Int(n + 100),
            other => other,
        }
    }

    fn on_set(&mut self, _map: &AttrMap, key: &Key, value: Value) -> Value {
        self.calls.push(format!("on_set {key}"));
        match value {
            Value::Text(s) => Value::Text(s.to_uppercase()),
            other => other,
        }
    }

    fn after_set(&mut self, _map: &AttrMap, key: &Key) -> attrmap::Result<()> {
        self.calls.push(format!("after_set {key}"));
        Ok(())
    }

    fn on_del(&mut self, _map: &AttrMap, key: &Key) -> bool {
        self.calls.push(format!("on_del {key}"));
        !self.veto_deletes
    }

    fn after_del(&mut self, _map: &AttrMap, key: &Key) -> attrmap::Result<()> {
        self.calls.push(format!("after_del {key}"));
        Ok(())
    }
}

#[test]
fn test_set_runs_on_and_after_hooks() {
    let mut map = HookedMap::new(AttrMap::new(), Recorder::default());

    map.set("name", "quiet").unwrap();

    // on_set rewrote the value before storage.
    assert!(*map.map().get("name").unwrap() == "QUIET");
    assert_eq!(map.hooks().calls, ["on_set name", "after_set name"]);
}

#[test]
fn test_get_runs_hooks_and_transforms_result() {
    let mut map = HookedMap::new(AttrMap::new().with("n", 1), Recorder::default());

    let value = map.get("n").unwrap();
    assert!(value == 101);

    // The stored entry is untouched; only the returned value changed.
    assert!(*map.map().get("n").unwrap() == 1);
    assert_eq!(map.hooks().calls, ["on_get n", "after_get n"]);
}

#[test]
fn test_get_missing_key_skips_after_hook() {
    let mut map = HookedMap::new(AttrMap::new(), Recorder::default());

    let err = map.get("absent").unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(map.hooks().calls, ["on_get absent"]);
}

#[test]
fn test_remove_runs_hooks() {
    let mut map = HookedMap::new(AttrMap::new().with("x", 1), Recorder::default());

    let old = map.remove("x").unwrap();
    assert_eq!(old, Some(Value::Int(1)));
    assert_eq!(map.hooks().calls, ["on_del x", "after_del x"]);
}

#[test]
fn test_on_del_veto_retains_entry() {
    let hooks = Recorder {
        veto_deletes: true,
        ..Recorder::default()
    };
    let mut map = HookedMap::new(AttrMap::new().with("keep", 1), hooks);

    let removed = map.remove("keep").unwrap();
    assert!(removed.is_none());
    assert!(map.map().contains("keep"));
    // after_del never ran.
    assert_eq!(map.hooks().calls, ["on_del keep"]);
}

#[test]
fn test_remove_missing_key_skips_hooks() {
    let mut map = HookedMap::new(AttrMap::new(), Recorder::default());

    let err = map.remove("absent").unwrap_err();
    assert!(err.is_not_found());
    assert!(map.hooks().calls.is_empty());
}

#[test]
fn test_attribute_paths_resolve_before_hooks_run() {
    let mut map = HookedMap::new(AttrMap::new(), Recorder::default());
    map.set("some key", "v").unwrap();

    // The hook sees the resolved key, not the attribute name.
    map.get_attr("some_key").unwrap();
    assert_eq!(
        map.hooks().calls,
        ["on_set some key", "after_set some key", "on_get some key", "after_get some key"]
    );

    let err = map.get_attr("missing").unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_set_attr_unresolved_name_becomes_text_key() {
    let mut map = HookedMap::new(AttrMap::new(), Recorder::default());
    map.set_attr("fresh", 1).unwrap();

    assert!(map.map().contains("fresh"));
    assert_eq!(map.hooks().calls, ["on_set fresh", "after_set fresh"]);
}

#[test]
fn test_merge_routes_every_pair_through_set() {
    let mut map = HookedMap::new(AttrMap::new(), Recorder::default());
    map.merge([("a", "x"), ("b", "y")]).unwrap();

    assert!(*map.map().get("a").unwrap() == "X");
    assert!(*map.map().get("b").unwrap() == "Y");
    assert_eq!(map.hooks().calls.len(), 4);
}

#[test]
fn test_map_mut_bypasses_hooks() {
    let mut map = HookedMap::new(AttrMap::new(), Recorder::default());
    map.map_mut().set("silent", "value");

    assert!(map.hooks().calls.is_empty());
    assert!(*map.map().get("silent").unwrap() == "value");
}

#[test]
fn test_no_hooks_passthrough() {
    let mut map = HookedMap::new(AttrMap::new(), NoHooks);
    map.set("k", "v").unwrap();

    assert!(map.get("k").unwrap() == "v");
    assert_eq!(map.remove("k").unwrap(), Some(Value::Text("v".into())));
}

#[test]
fn test_deref_gives_plain_reads() {
    let mut map = HookedMap::new(AttrMap::new(), Recorder::default());
    map.set("k", 1).unwrap();

    // Deref reads the map directly, no hook involvement.
    assert_eq!(map.len(), 1);
    assert!(map.contains("k"));
    assert_eq!(map.hooks().calls.len(), 2);
}

#[test]
fn test_into_parts() {
    let mut map = HookedMap::new(AttrMap::new(), Recorder::default());
    map.set("k", 1).unwrap();

    let (inner, hooks) = map.into_parts();
    assert_eq!(inner.len(), 1);
    assert_eq!(hooks.calls.len(), 2);
}
