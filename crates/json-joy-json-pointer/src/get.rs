use json_joy_util::JsonValue;

use crate::util::parse_index;
use crate::JsonPointerError;

/// Descend one reference token into `current`.
pub(crate) fn step<'a>(current: &'a JsonValue, token: &str) -> Result<&'a JsonValue, JsonPointerError> {
    match current {
        JsonValue::Object(map) => map.get(token).ok_or(JsonPointerError::NotFound),
        JsonValue::Array(arr) => Ok(&arr[parse_index(token, arr.len())?]),
        _ => Err(JsonPointerError::NotFound),
    }
}

pub(crate) fn step_mut<'a>(
    current: &'a mut JsonValue,
    token: &str,
) -> Result<&'a mut JsonValue, JsonPointerError> {
    match current {
        JsonValue::Object(map) => map.get_mut(token).ok_or(JsonPointerError::NotFound),
        JsonValue::Array(arr) => {
            let idx = parse_index(token, arr.len())?;
            Ok(&mut arr[idx])
        }
        _ => Err(JsonPointerError::NotFound),
    }
}

/// Get a value from a JSON document by path.
///
/// Array steps must address an existing element; `-` is not accepted.
pub fn get<'a>(val: &'a JsonValue, path: &[String]) -> Result<&'a JsonValue, JsonPointerError> {
    path.iter().try_fold(val, |current, token| step(current, token))
}

/// Get a mutable reference to a value in a JSON document by path.
pub fn get_mut<'a>(
    val: &'a mut JsonValue,
    path: &[String],
) -> Result<&'a mut JsonValue, JsonPointerError> {
    let mut current = val;
    for token in path {
        current = step_mut(current, token)?;
    }
    Ok(current)
}

/// Resolve every value along `path`.
///
/// Entry `i` is the value reached after consuming token `i`, so the result
/// has one entry per token and the last one is what [`get`] returns. The
/// root path resolves to an empty list.
pub fn resolve<'a>(
    val: &'a JsonValue,
    path: &[String],
) -> Result<Vec<&'a JsonValue>, JsonPointerError> {
    let mut values = Vec::with_capacity(path.len());
    let mut current = val;
    for token in path {
        current = step(current, token)?;
        values.push(current);
    }
    Ok(values)
}
