use crate::value::{JsonObject, JsonValue};

/// Creates a deep copy of a JSON value.
///
/// Every `Array` and `Object` gets a fresh allocation; scalars are copied
/// by value. Mutating the result never affects `value`.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use json_joy_util::{clone, JsonValue};
///
/// let original = JsonValue::from(json!({"foo": [1, 2, 3]}));
/// let cloned = clone(&original);
///
/// assert_eq!(original, cloned);
/// ```
pub fn clone(value: &JsonValue) -> JsonValue {
    match value {
        JsonValue::Null => JsonValue::Null,
        JsonValue::Bool(b) => JsonValue::Bool(*b),
        JsonValue::Number(n) => JsonValue::Number(*n),
        JsonValue::String(s) => JsonValue::String(s.clone()),
        JsonValue::Array(arr) => JsonValue::Array(arr.iter().map(clone).collect()),
        JsonValue::Object(obj) => {
            let mut new_obj = JsonObject::with_capacity(obj.len());
            for (key, val) in obj {
                new_obj.insert(key.clone(), clone(val));
            }
            JsonValue::Object(new_obj)
        }
    }
}
