//! The generic JSON value model.
//!
//! All numbers are stored as `f64`, the way a JSON document is seen by
//! JavaScript. Only `Array` and `Object` own child values.

use std::fmt;

use indexmap::IndexMap;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

/// Object member storage. Insertion order is kept for output only;
/// equality between objects ignores it.
pub type JsonObject = IndexMap<String, JsonValue>;

/// A parsed JSON value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum JsonValue {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<JsonValue>),
    Object(JsonObject),
}

impl JsonValue {
    pub fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            JsonValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            JsonValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsonValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Vec<JsonValue>> {
        match self {
            JsonValue::Array(arr) => Some(arr),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut Vec<JsonValue>> {
        match self {
            JsonValue::Array(arr) => Some(arr),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&JsonObject> {
        match self {
            JsonValue::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut JsonObject> {
        match self {
            JsonValue::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Returns true for `Array` and `Object`.
    pub fn is_container(&self) -> bool {
        matches!(self, JsonValue::Array(_) | JsonValue::Object(_))
    }

    /// JSON type name, as used in error messages and logs.
    pub fn type_name(&self) -> &'static str {
        match self {
            JsonValue::Null => "null",
            JsonValue::Bool(_) => "boolean",
            JsonValue::Number(_) => "number",
            JsonValue::String(_) => "string",
            JsonValue::Array(_) => "array",
            JsonValue::Object(_) => "object",
        }
    }
}

// ── serde_json interop ────────────────────────────────────────────────────

impl From<&serde_json::Value> for JsonValue {
    fn from(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => JsonValue::Null,
            serde_json::Value::Bool(b) => JsonValue::Bool(*b),
            // Without `arbitrary_precision` every serde_json number has an f64 form.
            serde_json::Value::Number(n) => JsonValue::Number(n.as_f64().unwrap_or(0.0)),
            serde_json::Value::String(s) => JsonValue::String(s.clone()),
            serde_json::Value::Array(arr) => {
                JsonValue::Array(arr.iter().map(JsonValue::from).collect())
            }
            serde_json::Value::Object(obj) => JsonValue::Object(
                obj.iter()
                    .map(|(key, val)| (key.clone(), JsonValue::from(val)))
                    .collect(),
            ),
        }
    }
}

impl From<serde_json::Value> for JsonValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => JsonValue::Null,
            serde_json::Value::Bool(b) => JsonValue::Bool(b),
            serde_json::Value::Number(n) => JsonValue::Number(n.as_f64().unwrap_or(0.0)),
            serde_json::Value::String(s) => JsonValue::String(s),
            serde_json::Value::Array(arr) => {
                JsonValue::Array(arr.into_iter().map(JsonValue::from).collect())
            }
            serde_json::Value::Object(obj) => JsonValue::Object(
                obj.into_iter()
                    .map(|(key, val)| (key, JsonValue::from(val)))
                    .collect(),
            ),
        }
    }
}

impl From<JsonValue> for serde_json::Value {
    /// Integral numbers that fit in an `i64` come out as JSON integers;
    /// NaN and infinities have no JSON form and become `null`.
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => serde_json::Value::Null,
            JsonValue::Bool(b) => serde_json::Value::Bool(b),
            JsonValue::Number(n) => number_to_json(n),
            JsonValue::String(s) => serde_json::Value::String(s),
            JsonValue::Array(arr) => {
                serde_json::Value::Array(arr.into_iter().map(serde_json::Value::from).collect())
            }
            JsonValue::Object(obj) => serde_json::Value::Object(
                obj.into_iter()
                    .map(|(key, val)| (key, serde_json::Value::from(val)))
                    .collect(),
            ),
        }
    }
}

fn as_integer(n: f64) -> Option<i64> {
    // 2^63 is exactly representable; anything at or past it overflows i64.
    if n.fract() == 0.0 && n >= -9_223_372_036_854_775_808.0 && n < 9_223_372_036_854_775_808.0 {
        Some(n as i64)
    } else {
        None
    }
}

fn number_to_json(n: f64) -> serde_json::Value {
    if let Some(i) = as_integer(n) {
        return serde_json::Value::Number(i.into());
    }
    serde_json::Number::from_f64(n)
        .map(serde_json::Value::Number)
        .unwrap_or(serde_json::Value::Null)
}

impl From<bool> for JsonValue {
    fn from(b: bool) -> Self {
        JsonValue::Bool(b)
    }
}

impl From<f64> for JsonValue {
    fn from(n: f64) -> Self {
        JsonValue::Number(n)
    }
}

impl From<&str> for JsonValue {
    fn from(s: &str) -> Self {
        JsonValue::String(s.to_string())
    }
}

impl From<String> for JsonValue {
    fn from(s: String) -> Self {
        JsonValue::String(s)
    }
}

impl From<Vec<JsonValue>> for JsonValue {
    fn from(arr: Vec<JsonValue>) -> Self {
        JsonValue::Array(arr)
    }
}

impl From<JsonObject> for JsonValue {
    fn from(obj: JsonObject) -> Self {
        JsonValue::Object(obj)
    }
}

// ── serde ─────────────────────────────────────────────────────────────────

impl Serialize for JsonValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            JsonValue::Null => serializer.serialize_unit(),
            JsonValue::Bool(b) => serializer.serialize_bool(*b),
            JsonValue::Number(n) => match as_integer(*n) {
                Some(i) => serializer.serialize_i64(i),
                None if n.is_finite() => serializer.serialize_f64(*n),
                None => serializer.serialize_unit(),
            },
            JsonValue::String(s) => serializer.serialize_str(s),
            JsonValue::Array(arr) => {
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for item in arr {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            JsonValue::Object(obj) => {
                let mut map = serializer.serialize_map(Some(obj.len()))?;
                for (key, val) in obj {
                    map.serialize_entry(key, val)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for JsonValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(JsonValue::from)
    }
}

impl fmt::Display for JsonValue {
    /// Compact JSON text.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_serde_json_numbers_are_f64() {
        assert_eq!(JsonValue::from(json!(3)), JsonValue::Number(3.0));
        assert_eq!(JsonValue::from(json!(-1.5)), JsonValue::Number(-1.5));
    }

    #[test]
    fn test_to_serde_json_integral_numbers() {
        let out: serde_json::Value = JsonValue::Number(3.0).into();
        assert_eq!(out, json!(3));
        let out: serde_json::Value = JsonValue::Number(1.25).into();
        assert_eq!(out, json!(1.25));
        let out: serde_json::Value = JsonValue::Number(f64::NAN).into();
        assert_eq!(out, json!(null));
    }

    #[test]
    fn test_nested_conversion() {
        let original = json!({"a": [1, true, null, "x", {"b": 2.5}]});
        let value = JsonValue::from(&original);
        let back: serde_json::Value = value.into();
        assert_eq!(back, original);
    }

    #[test]
    fn test_object_equality_ignores_order() {
        let a = JsonValue::from(json!({"a": 1, "b": 2}));
        let mut obj = JsonObject::new();
        obj.insert("b".to_string(), JsonValue::Number(2.0));
        obj.insert("a".to_string(), JsonValue::Number(1.0));
        assert_eq!(a, JsonValue::Object(obj));
    }

    #[test]
    fn test_serde_roundtrip_text() {
        let value: JsonValue = serde_json::from_str(r#"{"foo":[1,2.5,"bar"],"n":null}"#).unwrap();
        assert_eq!(value.to_string(), r#"{"foo":[1,2.5,"bar"],"n":null}"#);
    }

    #[test]
    fn test_float_text_roundtrip_is_exact() {
        let value = JsonValue::Number(127901.88568013345);
        let text = serde_json::to_string(&value).unwrap();
        assert_eq!(text, "127901.88568013345");
        let parsed: JsonValue = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed.as_f64().map(f64::to_bits), Some(127901.88568013345f64.to_bits()));
    }

    #[test]
    fn test_deserialize_keeps_key_order() {
        let value: JsonValue = serde_json::from_str(r#"{"z":1,"a":2,"m":3}"#).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, ["z", "a", "m"]);
        assert_eq!(value.to_string(), r#"{"z":1,"a":2,"m":3}"#);
    }

    #[test]
    fn test_type_name() {
        assert_eq!(JsonValue::Null.type_name(), "null");
        assert_eq!(JsonValue::from("x").type_name(), "string");
        assert_eq!(JsonValue::from(json!([])).type_name(), "array");
        assert!(JsonValue::from(json!({})).is_container());
        assert!(!JsonValue::Bool(true).is_container());
    }
}
