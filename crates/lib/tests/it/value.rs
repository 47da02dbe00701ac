//! Tests for `Value` conversions, accessors, and comparisons.

use attrmap::{AttrList, AttrMap, Value};

#[test]
fn test_accessors_return_none_on_wrong_type() {
    let v = Value::from(42);

    assert_eq!(v.as_int(), Some(42));
    assert_eq!(v.as_text(), None);
    assert_eq!(v.as_bool(), None);
    assert!(v.as_map().is_none());
    assert!(v.as_list().is_none());
}

#[test]
fn test_type_names() {
    assert_eq!(Value::Null.type_name(), "null");
    assert_eq!(Value::from(true).type_name(), "bool");
    assert_eq!(Value::from(1).type_name(), "int");
    assert_eq!(Value::from(1.5).type_name(), "float");
    assert_eq!(Value::from("s").type_name(), "text");
    assert_eq!(Value::from(AttrMap::new()).type_name(), "map");
    assert_eq!(Value::from(AttrList::new()).type_name(), "list");
}

#[test]
fn test_leaf_and_container_predicates() {
    assert!(Value::from("text").is_leaf());
    assert!(Value::from(3.5).is_leaf());
    assert!(Value::Null.is_leaf());
    assert!(Value::Null.is_null());

    assert!(Value::from(AttrMap::new()).is_container());
    assert!(Value::from(AttrList::new()).is_container());
    assert!(!Value::from(AttrMap::new()).is_leaf());
}

#[test]
fn test_from_conversions() {
    assert_eq!(Value::from(7i32), Value::Int(7));
    assert_eq!(Value::from(7u32), Value::Int(7));
    assert_eq!(Value::from(2.5f32), Value::Float(2.5));
    assert_eq!(Value::from(String::from("owned")), Value::Text("owned".into()));
    assert_eq!(Value::from(vec![Value::from(1), Value::from(2)]).type_name(), "list");

    // Option maps None to Null.
    assert_eq!(Value::from(None::<i64>), Value::Null);
    assert_eq!(Value::from(Some(3)), Value::Int(3));
}

#[test]
fn test_try_from_extracts_typed_values() {
    let v = Value::from("hello");
    let s: &str = (&v).try_into().unwrap();
    assert_eq!(s, "hello");

    let owned: String = (&v).try_into().unwrap();
    assert_eq!(owned, "hello");

    let n = Value::from(9);
    let i: i64 = (&n).try_into().unwrap();
    assert_eq!(i, 9);
}

#[test]
fn test_try_from_type_mismatch() {
    let v = Value::from("not a number");
    let err = i64::try_from(&v).unwrap_err();
    assert!(err.is_type_mismatch());

    let v = Value::from(1);
    let err = bool::try_from(&v).unwrap_err();
    assert!(err.is_type_mismatch());
}

#[test]
fn test_partial_eq_with_primitives() {
    let v = Value::from("text");
    assert!(v == "text");
    assert!("text" == v);
    assert!(v == String::from("text"));

    let n = Value::from(5);
    assert!(n == 5i64);
    assert!(n == 5i32);
    assert!(5i64 == n);

    let f = Value::from(2.5);
    assert!(f == 2.5);

    let b = Value::from(true);
    assert!(b == true);
    assert!(b != false);
}

#[test]
fn test_tuple_values() {
    let pair = Value::from(("id", 7));
    assert_eq!(pair.type_name(), "tuple");
    assert!(pair.is_container());

    let items = pair.as_tuple().unwrap();
    assert_eq!(items.len(), 2);
    assert!(items[0] == "id");
    assert!(items[1] == 7);

    let triple = Value::from(("x", 1, true));
    assert_eq!(triple.as_tuple().unwrap().len(), 3);
    assert_eq!(triple.to_string(), "(x, 1, true)");

    assert_eq!(pair, Value::from(("id", 7)));
    assert_ne!(pair, triple);
}

#[test]
fn test_float_equality_by_bits() {
    assert_eq!(Value::from(f64::NAN), Value::from(f64::NAN));
    assert_ne!(Value::from(0.0), Value::from(-0.0));
    assert_eq!(Value::from(1.5), Value::from(1.5));
}

#[test]
fn test_display() {
    assert_eq!(Value::Null.to_string(), "null");
    assert_eq!(Value::from(true).to_string(), "true");
    assert_eq!(Value::from(42).to_string(), "42");
    assert_eq!(Value::from("hi").to_string(), "hi");
}

#[test]
fn test_default_is_null() {
    assert_eq!(Value::default(), Value::Null);
}

#[test]
fn test_mutable_container_access() {
    let mut v = Value::from(AttrMap::new());
    v.as_map_mut().unwrap().set("k", 1);
    assert!(*v.as_map().unwrap().get("k").unwrap() == 1);

    let mut v = Value::from(AttrList::new());
    v.as_list_mut().unwrap().push("item");
    assert_eq!(v.as_list().unwrap().len(), 1);
}
