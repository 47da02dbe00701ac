//! Tests for the file-backed map: persistence, autosave toggling,
//! loading, and the builder.

use attrmap::{AttrMap, AutosaveMap, Value};
use serde_json::json;

fn read_json(path: &std::path::Path) -> serde_json::Value {
    let text = std::fs::read_to_string(path).unwrap();
    serde_json::from_str(&text).unwrap()
}

#[test]
fn test_open_missing_file_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");

    let map = AutosaveMap::open(&path).unwrap();
    assert!(map.is_empty());
    assert!(map.autosave());
    // Opening never creates the file.
    assert!(!path.exists());
}

#[test]
fn test_set_persists_immediately() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");

    let mut map = AutosaveMap::open(&path).unwrap();
    map.set("key", "value").unwrap();

    assert_eq!(read_json(&path), json!({"key": "value"}));

    map.set("other", 2).unwrap();
    assert_eq!(read_json(&path), json!({"key": "value", "other": 2}));
}

#[test]
fn test_file_format_is_sorted_and_indented() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("format.json");

    let mut map = AutosaveMap::open(&path).unwrap();
    map.set("b", 2).unwrap();
    map.set("a", 1).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text, "{\n    \"a\": 1,\n    \"b\": 2\n}");
}

#[test]
fn test_remove_persists() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("remove.json");

    let mut map = AutosaveMap::open(&path).unwrap();
    map.set("gone", 1).unwrap();
    let old = map.remove("gone").unwrap();

    assert_eq!(old, Some(Value::Int(1)));
    assert_eq!(read_json(&path), json!({}));
}

#[test]
fn test_autosave_disabled_defers_writes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("deferred.json");

    let mut map = AutosaveMap::builder(&path).autosave(false).open().unwrap();
    map.set("key", "value").unwrap();
    assert!(!path.exists());

    map.store().unwrap();
    assert_eq!(read_json(&path), json!({"key": "value"}));

    // Re-enabling brings back write-through.
    map.enable_autosave(true);
    map.set("more", true).unwrap();
    assert_eq!(read_json(&path), json!({"key": "value", "more": true}));
}

#[test]
fn test_second_instance_sees_saved_state() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shared.json");

    let mut writer = AutosaveMap::open(&path).unwrap();
    writer.set("best pony", "Littlepip").unwrap();

    let reader = AutosaveMap::open(&path).unwrap();
    assert!(*reader.get_attr("best_pony").unwrap() == "Littlepip");
}

#[test]
fn test_load_replace_and_merge() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("load.json");
    std::fs::write(&path, r#"{"from_file": 1}"#).unwrap();

    let mut map = AutosaveMap::builder(&path).autosave(false).open().unwrap();
    map.set("local", 2).unwrap();

    // merge keeps in-memory entries the file lacks.
    map.load(true).unwrap();
    assert_eq!(map.len(), 2);

    // replace drops them.
    map.load(false).unwrap();
    assert_eq!(map.len(), 1);
    assert!(*map.get("from_file").unwrap() == 1);
}

#[test]
fn test_load_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("never-written.json");

    let mut map = AutosaveMap::open(&path).unwrap();
    let err = map.load(true).unwrap_err();
    assert!(err.is_io());
}

#[test]
fn test_open_non_object_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("array.json");
    std::fs::write(&path, "[1, 2, 3]").unwrap();

    let err = AutosaveMap::open(&path).unwrap_err();
    assert!(err.is_type_mismatch());
}

#[test]
fn test_open_corrupt_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("corrupt.json");
    std::fs::write(&path, "{not json").unwrap();

    let err = AutosaveMap::open(&path).unwrap_err();
    assert!(err.is_json());
}

#[test]
fn test_builder_defaults_yield_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("defaults.json");
    std::fs::write(&path, r#"{"port": 9000}"#).unwrap();

    let map = AutosaveMap::builder(&path)
        .autosave(false)
        .defaults(AttrMap::new().with("port", 8080).with("host", "localhost"))
        .open()
        .unwrap();

    assert!(*map.get("port").unwrap() == 9000);
    assert!(*map.get("host").unwrap() == "localhost");
}

#[test]
fn test_builder_dir_joins_file_name() {
    let dir = tempfile::tempdir().unwrap();

    let mut map = AutosaveMap::builder("nested.json")
        .dir(dir.path())
        .open()
        .unwrap();
    map.set("k", 1).unwrap();

    assert_eq!(read_json(&dir.path().join("nested.json")), json!({"k": 1}));
}

#[test]
fn test_builder_skip_load_ignores_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ignored.json");
    std::fs::write(&path, r#"{"existing": true}"#).unwrap();

    let map = AutosaveMap::builder(&path).load(false).autosave(false).open().unwrap();
    assert!(map.is_empty());
}

#[test]
fn test_store_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("deep").join("tree").join("store.json");

    let mut map = AutosaveMap::open(&path).unwrap();
    map.set("k", "v").unwrap();

    assert_eq!(read_json(&path), json!({"k": "v"}));
}

#[test]
fn test_merge_stores_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("merged.json");

    let mut map = AutosaveMap::open(&path).unwrap();
    map.merge([("a", 1), ("b", 2), ("c", 3)]).unwrap();

    assert_eq!(read_json(&path), json!({"a": 1, "b": 2, "c": 3}));
}

#[test]
fn test_into_map_detaches_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("detach.json");

    let mut map = AutosaveMap::open(&path).unwrap();
    map.set("k", 1).unwrap();

    let mut plain = map.into_map();
    plain.set("unsaved", 2);

    assert_eq!(read_json(&path), json!({"k": 1}));
}
