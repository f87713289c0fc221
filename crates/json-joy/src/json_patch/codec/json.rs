//! JSON codec for JSON Patch operations.
//!
//! Converts operation descriptors (`{"op": "add", "path": ...}`) to typed
//! [`Op`]s and back. Required fields are checked in a fixed order and the
//! first missing or malformed one decides the reported error.

use json_joy_json_pointer::{format_json_pointer, parse_json_pointer};
use json_joy_util::{JsonObject, JsonValue};

use crate::json_patch::types::{DecodeError, DecodeOptions, Op, OperationError, Path};
use crate::json_patch::validate::validate_patch;

// ── Field helpers ─────────────────────────────────────────────────────────

fn decode_path(obj: &JsonObject) -> Result<Path, OperationError> {
    let path = obj.get("path").ok_or(OperationError::MissingPath)?;
    let path = path.as_str().ok_or(OperationError::InvalidPath)?;
    Ok(parse_json_pointer(path)?)
}

fn decode_from(obj: &JsonObject) -> Result<Path, OperationError> {
    obj.get("from")
        .and_then(JsonValue::as_str)
        .and_then(|from| parse_json_pointer(from).ok())
        .ok_or(OperationError::InvalidFrom)
}

fn decode_value(obj: &JsonObject) -> Result<JsonValue, OperationError> {
    obj.get("value").cloned().ok_or(OperationError::MissingValue)
}

/// A non-negative integral number that fits in `usize`.
fn as_count(v: &JsonValue) -> Option<usize> {
    let n = v.as_f64()?;
    if n >= 0.0 && n.fract() == 0.0 && n <= usize::MAX as f64 {
        Some(n as usize)
    } else {
        None
    }
}

fn decode_pos(obj: &JsonObject) -> Result<usize, OperationError> {
    obj.get("pos").and_then(as_count).ok_or(OperationError::InvalidPos)
}

fn decode_str(obj: &JsonObject) -> Result<String, OperationError> {
    obj.get("str")
        .and_then(JsonValue::as_str)
        .map(str::to_string)
        .ok_or(OperationError::InvalidStr)
}

fn encode_path(path: &[String]) -> JsonValue {
    JsonValue::String(format_json_pointer(path))
}

// ── Serialization ─────────────────────────────────────────────────────────

/// Serialize an `Op` to its operation descriptor.
pub fn to_json(op: &Op) -> JsonValue {
    let mut m = JsonObject::new();
    m.insert("op".into(), op.op_name().into());
    m.insert("path".into(), encode_path(op.path()));
    match op {
        Op::Add { value, .. } | Op::Replace { value, .. } | Op::Test { value, .. } => {
            m.insert("value".into(), value.clone());
        }
        Op::Copy { from, .. } | Op::Move { from, .. } => {
            m.insert("from".into(), encode_path(from));
        }
        Op::StrIns { pos, str_val, .. } => {
            m.insert("pos".into(), JsonValue::Number(*pos as f64));
            m.insert("str".into(), str_val.as_str().into());
        }
        Op::StrDel {
            pos, str_val, len, ..
        } => {
            m.insert("pos".into(), JsonValue::Number(*pos as f64));
            if let Some(s) = str_val {
                m.insert("str".into(), s.as_str().into());
            }
            if let Some(l) = len {
                m.insert("len".into(), JsonValue::Number(*l as f64));
            }
        }
        Op::Inc { inc, .. } => {
            m.insert("inc".into(), JsonValue::Number(*inc));
        }
        Op::Remove { .. } | Op::Flip { .. } => {}
    }
    JsonValue::Object(m)
}

/// Serialize a list of operations to a raw patch array.
pub fn to_json_patch(ops: &[Op]) -> JsonValue {
    JsonValue::Array(ops.iter().map(to_json).collect())
}

// ── Deserialization ───────────────────────────────────────────────────────

/// Deserialize one operation descriptor into an `Op`.
pub fn from_json(v: &JsonValue) -> Result<Op, OperationError> {
    let obj = v.as_object().ok_or(OperationError::Invalid)?;
    let op_str = obj
        .get("op")
        .and_then(JsonValue::as_str)
        .ok_or(OperationError::Invalid)?;

    match op_str {
        "add" => Ok(Op::Add {
            path: decode_path(obj)?,
            value: decode_value(obj)?,
        }),
        "replace" => Ok(Op::Replace {
            path: decode_path(obj)?,
            value: decode_value(obj)?,
        }),
        "test" => Ok(Op::Test {
            path: decode_path(obj)?,
            value: decode_value(obj)?,
        }),
        "remove" => Ok(Op::Remove {
            path: decode_path(obj)?,
        }),
        "move" => Ok(Op::Move {
            path: decode_path(obj)?,
            from: decode_from(obj)?,
        }),
        "copy" => Ok(Op::Copy {
            path: decode_path(obj)?,
            from: decode_from(obj)?,
        }),
        "str_ins" => Ok(Op::StrIns {
            path: decode_path(obj)?,
            pos: decode_pos(obj)?,
            str_val: decode_str(obj)?,
        }),
        "str_del" => {
            let path = decode_path(obj)?;
            let pos = decode_pos(obj)?;
            let (str_val, len) = match (obj.get("str"), obj.get("len")) {
                (Some(_), None) => (Some(decode_str(obj)?), None),
                (None, Some(len)) => (None, Some(as_count(len).ok_or(OperationError::InvalidLen)?)),
                _ => return Err(OperationError::InvalidStrDel),
            };
            Ok(Op::StrDel {
                path,
                pos,
                str_val,
                len,
            })
        }
        "flip" => Ok(Op::Flip {
            path: decode_path(obj)?,
        }),
        "inc" => {
            let path = decode_path(obj)?;
            let inc = obj
                .get("inc")
                .and_then(JsonValue::as_f64)
                .ok_or(OperationError::InvalidInc)?;
            Ok(Op::Inc { path, inc })
        }
        _ => Err(OperationError::Unknown),
    }
}

/// Decode every descriptor in order.
///
/// Stops at the first bad descriptor and reports its zero-based index;
/// nothing decoded before it is returned.
pub fn parse_operations(ops: &[JsonValue]) -> Result<Vec<Op>, DecodeError> {
    ops.iter()
        .enumerate()
        .map(|(index, raw)| {
            let op = from_json(raw).map_err(|source| DecodeError::Operation { index, source })?;
            log::trace!("decoded operation [index = {index}] {}", op.op_name());
            Ok(op)
        })
        .collect()
}

/// Validate a raw patch and decode it into a list of operations.
pub fn from_json_patch(patch: &JsonValue, options: &DecodeOptions) -> Result<Vec<Op>, DecodeError> {
    let ops = validate_patch(patch, options)?;
    parse_operations(ops)
}
