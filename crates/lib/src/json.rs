//! JSON conversion between plain trees and attribute-accessible containers.
//!
//! The "plain" universe is [`serde_json::Value`]: objects, arrays, and
//! scalars with no attribute access. [`Value::from_json`] wraps a plain tree
//! into this crate's types (objects become [`AttrMap`]s, arrays become
//! [`AttrList`]s) and [`Value::to_json`] reverses it. Serde `Serialize` and
//! `Deserialize` for every container route through these conversions, so
//! wrapped containers never appear verbatim in serialized output — a
//! serialized map is an ordinary JSON object.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value as Json;

use crate::{AttrList, AttrMap, AttrSet, Error, Key, Result, Value};

impl Value {
    /// Wraps a plain JSON tree into attribute-accessible values.
    ///
    /// Objects become [`AttrMap`]s and arrays become [`AttrList`]s,
    /// recursively; scalars carry over unchanged. Integral JSON numbers map
    /// to [`Value::Int`], everything else to [`Value::Float`].
    pub fn from_json(json: Json) -> Value {
        match json {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Bool(b),
            Json::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else {
                    // u64 beyond i64::MAX or a fraction; carry as float.
                    Value::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            Json::String(s) => Value::Text(s),
            Json::Array(items) => Value::List(items.into_iter().map(Value::from_json).collect()),
            Json::Object(entries) => {
                let mut map = AttrMap::new();
                for (key, value) in entries {
                    map.set(Key::Text(key), Value::from_json(value));
                }
                Value::Map(map)
            }
        }
    }

    /// Unwraps this value into a plain JSON tree.
    ///
    /// The inverse of [`Value::from_json`]: maps become objects (keys via
    /// [`Key::as_json_key`]), lists become arrays, and sets and tuples —
    /// which JSON has no native shape for — become arrays too. Non-finite
    /// floats become `null`. Distinct keys whose JSON key forms coincide
    /// collapse to one object member, later entries winning.
    ///
    /// For any plain tree `x`, `Value::from_json(x).to_json() == x` as long
    /// as `x` contains no such key collisions.
    pub fn to_json(&self) -> Json {
        match self {
            Value::Null => Json::Null,
            Value::Bool(b) => Json::Bool(*b),
            Value::Int(n) => Json::from(*n),
            Value::Float(x) => serde_json::Number::from_f64(*x)
                .map(Json::Number)
                .unwrap_or(Json::Null),
            Value::Text(s) => Json::String(s.clone()),
            Value::Map(map) => map.to_json(),
            Value::List(list) => Json::Array(list.iter().map(Value::to_json).collect()),
            Value::Set(set) => Json::Array(set.iter().map(Value::to_json).collect()),
            Value::Tuple(items) => Json::Array(items.iter().map(Value::to_json).collect()),
        }
    }

    /// Wraps any serializable value.
    ///
    /// The typed escape hatch for storing foreign structs: anything
    /// implementing [`serde::Serialize`] is converted through its JSON
    /// representation. Fails with [`Error::Json`] if the value has no JSON
    /// form.
    ///
    /// ```
    /// use attrmap::Value;
    /// use serde::Serialize;
    ///
    /// #[derive(Serialize)]
    /// struct Pony {
    ///     name: &'static str,
    /// }
    ///
    /// let value = Value::from_serialize(&Pony { name: "Littlepip" }).unwrap();
    /// assert!(*value.as_map().unwrap().get_attr("name").unwrap() == "Littlepip");
    /// ```
    pub fn from_serialize<T: Serialize>(value: &T) -> Result<Value> {
        Ok(Value::from_json(serde_json::to_value(value)?))
    }
}

impl AttrMap {
    /// Wraps a plain JSON object into a map.
    ///
    /// Fails with [`Error::TypeMismatch`] if the tree is not an object.
    pub fn from_json(json: Json) -> Result<AttrMap> {
        match Value::from_json(json) {
            Value::Map(map) => Ok(map),
            other => Err(Error::TypeMismatch {
                expected: "JSON object".to_string(),
                actual: other.type_name().to_string(),
            }),
        }
    }

    /// Unwraps this map into a plain JSON object.
    ///
    /// Keys are rendered with [`Key::as_json_key`]; member order is sorted
    /// by key.
    pub fn to_json(&self) -> Json {
        let mut object = serde_json::Map::new();
        for (key, value) in self.iter() {
            object.insert(key.as_json_key(), value.to_json());
        }
        Json::Object(object)
    }

    /// Merges a plain JSON object into this map.
    ///
    /// Fails with [`Error::TypeMismatch`] if the tree is not an object;
    /// otherwise every member goes through [`AttrMap::set`] in the object's
    /// member order.
    pub fn merge_json(&mut self, json: Json) -> Result<()> {
        match json {
            Json::Object(entries) => {
                for (key, value) in entries {
                    self.set(Key::Text(key), Value::from_json(value));
                }
                Ok(())
            }
            other => Err(Error::TypeMismatch {
                expected: "JSON object".to_string(),
                actual: json_type_name(&other).to_string(),
            }),
        }
    }
}

fn json_type_name(json: &Json) -> &'static str {
    match json {
        Json::Null => "null",
        Json::Bool(_) => "bool",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}

impl From<Json> for Value {
    fn from(json: Json) -> Self {
        Value::from_json(json)
    }
}

impl From<&Value> for Json {
    fn from(value: &Value) -> Self {
        value.to_json()
    }
}

// Serde routes through the JSON conversions: containers serialize as the
// plain trees they wrap.

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Ok(Value::from_json(Json::deserialize(deserializer)?))
    }
}

impl Serialize for AttrMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for AttrMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        AttrMap::from_json(Json::deserialize(deserializer)?).map_err(D::Error::custom)
    }
}

impl Serialize for AttrList {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter().map(Value::to_json))
    }
}

impl<'de> Deserialize<'de> for AttrList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let items = Vec::<Json>::deserialize(deserializer)?;
        Ok(items.into_iter().map(Value::from_json).collect())
    }
}

impl Serialize for AttrSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter().map(Value::to_json))
    }
}

impl<'de> Deserialize<'de> for AttrSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let items = Vec::<Json>::deserialize(deserializer)?;
        Ok(items.into_iter().map(Value::from_json).collect())
    }
}
