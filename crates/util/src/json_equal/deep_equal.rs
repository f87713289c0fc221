use crate::value::JsonValue;

/// Performs a deep equality check between two JSON values.
///
/// Values of different variants are never equal. Arrays compare element by
/// element; objects compare key by key, ignoring member order.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use json_joy_util::{deep_equal, JsonValue};
///
/// let a = JsonValue::from(json!({"foo": [1, 2, 3]}));
/// let b = JsonValue::from(json!({"foo": [1, 2, 3]}));
/// let c = JsonValue::from(json!({"foo": [1, 2, 4]}));
///
/// assert!(deep_equal(&a, &b));
/// assert!(!deep_equal(&a, &c));
/// ```
pub fn deep_equal(a: &JsonValue, b: &JsonValue) -> bool {
    match (a, b) {
        (JsonValue::Null, JsonValue::Null) => true,
        (JsonValue::Bool(a), JsonValue::Bool(b)) => a == b,
        (JsonValue::Number(a), JsonValue::Number(b)) => a == b,
        (JsonValue::String(a), JsonValue::String(b)) => a == b,

        (JsonValue::Array(arr_a), JsonValue::Array(arr_b)) => {
            if arr_a.len() != arr_b.len() {
                return false;
            }
            arr_a.iter().zip(arr_b).all(|(x, y)| deep_equal(x, y))
        }

        (JsonValue::Object(obj_a), JsonValue::Object(obj_b)) => {
            if obj_a.len() != obj_b.len() {
                return false;
            }
            for (key, val_a) in obj_a {
                match obj_b.get(key) {
                    Some(val_b) => {
                        if !deep_equal(val_a, val_b) {
                            return false;
                        }
                    }
                    None => return false,
                }
            }
            true
        }

        _ => false,
    }
}
