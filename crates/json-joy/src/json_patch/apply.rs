//! JSON Patch apply logic.
//!
//! Operations are applied in order to one live document. Object members
//! are updated through the map that holds them. Array inserts and removals
//! go through the `Vec` returned by [`locate_mut`], since they shift the
//! elements that follow.

use indexmap::map::{Entry, VacantEntry};
use json_joy_json_pointer::{get, get_mut, locate_mut, parse_index, parse_insert_index, to_index};
use json_joy_util::{clone, deep_equal, JsonValue};

use super::types::{ApplyError, ApplyPatchOptions, Op, PatchError};

// ── Target lookup ─────────────────────────────────────────────────────────

/// Where a value-rewriting operation writes its result.
enum Slot<'a> {
    /// An existing value, including the document root.
    Occupied(&'a mut JsonValue),
    /// A missing key of an existing object.
    Vacant(VacantEntry<'a, String, JsonValue>),
}

fn slot<'a>(doc: &'a mut JsonValue, path: &[String]) -> Result<Slot<'a>, PatchError> {
    if path.is_empty() {
        return Ok(Slot::Occupied(doc));
    }
    let (parent, key) = locate_mut(doc, path)?.ok_or(PatchError::NotFound)?;
    match parent {
        JsonValue::Object(map) => match map.entry(key.to_string()) {
            Entry::Occupied(entry) => Ok(Slot::Occupied(entry.into_mut())),
            Entry::Vacant(entry) => Ok(Slot::Vacant(entry)),
        },
        JsonValue::Array(arr) => {
            let idx = parse_index(key, arr.len())?;
            Ok(Slot::Occupied(&mut arr[idx]))
        }
        _ => Err(PatchError::NotFound),
    }
}

/// Character offset to byte offset, clamped to the end of `s`.
fn byte_offset(s: &str, pos: usize) -> usize {
    s.char_indices().nth(pos).map_or(s.len(), |(i, _)| i)
}

// ── Individual operation applicators ─────────────────────────────────────

fn apply_add(doc: &mut JsonValue, path: &[String], value: JsonValue) -> Result<Option<JsonValue>, PatchError> {
    if path.is_empty() {
        return Ok(Some(std::mem::replace(doc, value)));
    }
    let (parent, key) = locate_mut(doc, path)?.ok_or(PatchError::NotFound)?;
    match parent {
        JsonValue::Object(map) => Ok(map.insert(key.to_string(), value)),
        JsonValue::Array(arr) => {
            let idx = parse_insert_index(key, arr.len())?;
            arr.insert(idx, value);
            Ok(None)
        }
        _ => Err(PatchError::NotFound),
    }
}

fn apply_remove(doc: &mut JsonValue, path: &[String]) -> Result<JsonValue, PatchError> {
    if path.is_empty() {
        return Ok(std::mem::take(doc));
    }
    let (parent, key) = locate_mut(doc, path)?.ok_or(PatchError::NotFound)?;
    match parent {
        JsonValue::Object(map) => map.shift_remove(key).ok_or(PatchError::NotFound),
        JsonValue::Array(arr) => {
            let idx = to_index(key)?;
            if idx >= arr.len() {
                return Err(PatchError::NotFound);
            }
            Ok(arr.remove(idx))
        }
        _ => Err(PatchError::NotFound),
    }
}

fn apply_replace(doc: &mut JsonValue, path: &[String], value: JsonValue) -> Result<Option<JsonValue>, PatchError> {
    if path.is_empty() {
        return Ok(Some(std::mem::replace(doc, value)));
    }
    let (parent, key) = locate_mut(doc, path)?.ok_or(PatchError::NotFound)?;
    let target = match parent {
        JsonValue::Object(map) => map.get_mut(key).ok_or(PatchError::NotFound)?,
        JsonValue::Array(arr) => {
            let idx = to_index(key)?;
            arr.get_mut(idx).ok_or(PatchError::NotFound)?
        }
        _ => return Err(PatchError::NotFound),
    };
    Ok(Some(std::mem::replace(target, value)))
}

fn apply_copy(doc: &mut JsonValue, path: &[String], from: &[String]) -> Result<Option<JsonValue>, PatchError> {
    let src = clone(get(doc, from)?);
    apply_add(doc, path, src)
}

fn apply_move(doc: &mut JsonValue, path: &[String], from: &[String]) -> Result<Option<JsonValue>, PatchError> {
    let value = apply_remove(doc, from)?;
    apply_add(doc, path, value)
}

fn apply_test(doc: &JsonValue, path: &[String], value: &JsonValue) -> Result<(), PatchError> {
    let actual = get(doc, path)?;
    if deep_equal(actual, value) {
        Ok(())
    } else {
        Err(PatchError::Test)
    }
}

fn apply_str_ins(doc: &mut JsonValue, path: &[String], pos: usize, str_val: &str) -> Result<(), PatchError> {
    match slot(doc, path)? {
        Slot::Occupied(JsonValue::String(s)) => {
            let at = byte_offset(s, pos);
            s.insert_str(at, str_val);
            Ok(())
        }
        Slot::Vacant(entry) if pos == 0 => {
            entry.insert(JsonValue::String(str_val.to_string()));
            Ok(())
        }
        _ => Err(PatchError::NotAString),
    }
}

fn apply_str_del(doc: &mut JsonValue, path: &[String], pos: usize, len: usize) -> Result<(), PatchError> {
    let JsonValue::String(s) = get_mut(doc, path)? else {
        return Err(PatchError::NotAString);
    };
    let start = byte_offset(s, pos);
    let end = byte_offset(s, pos.saturating_add(len));
    s.replace_range(start..end, "");
    Ok(())
}

/// Truthiness used by `flip`. Strings always flip to `false`, empty or not.
fn flipped(val: &JsonValue) -> bool {
    match val {
        JsonValue::Null => true,
        JsonValue::Bool(b) => !b,
        JsonValue::Number(n) => *n == 0.0,
        JsonValue::String(_) | JsonValue::Array(_) | JsonValue::Object(_) => false,
    }
}

fn apply_flip(doc: &mut JsonValue, path: &[String]) -> Result<Option<JsonValue>, PatchError> {
    match slot(doc, path)? {
        Slot::Occupied(target) => {
            let next = JsonValue::Bool(flipped(target));
            Ok(Some(std::mem::replace(target, next)))
        }
        Slot::Vacant(entry) => {
            entry.insert(JsonValue::Bool(true));
            Ok(None)
        }
    }
}

/// Numeric coercion used by `inc`.
fn to_number(val: &JsonValue) -> f64 {
    match val {
        JsonValue::Number(n) => *n,
        JsonValue::Bool(true) => 1.0,
        JsonValue::String(s) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .unwrap_or(0.0),
        JsonValue::Null | JsonValue::Bool(false) | JsonValue::Array(_) | JsonValue::Object(_) => 0.0,
    }
}

fn apply_inc(doc: &mut JsonValue, path: &[String], inc: f64) -> Result<Option<JsonValue>, PatchError> {
    match slot(doc, path)? {
        Slot::Occupied(target) => {
            let next = JsonValue::Number(to_number(target) + inc);
            Ok(Some(std::mem::replace(target, next)))
        }
        Slot::Vacant(entry) => {
            entry.insert(JsonValue::Number(inc));
            Ok(None)
        }
    }
}

// ── Main apply function ───────────────────────────────────────────────────

/// Apply a single operation to the document (in-place mutation).
///
/// Returns the value the operation displaced, where there is one: the
/// overwritten value for `add`/`replace`/`flip`/`inc`, the removed value for
/// `remove`, and the value overwritten at the target for `move`/`copy`.
pub fn apply_op(doc: &mut JsonValue, op: &Op) -> Result<Option<JsonValue>, PatchError> {
    match op {
        Op::Add { path, value } => apply_add(doc, path, clone(value)),
        Op::Remove { path } => apply_remove(doc, path).map(Some),
        Op::Replace { path, value } => apply_replace(doc, path, clone(value)),
        Op::Copy { path, from } => apply_copy(doc, path, from),
        Op::Move { path, from } => apply_move(doc, path, from),
        Op::Test { path, value } => {
            apply_test(doc, path, value)?;
            Ok(None)
        }
        Op::StrIns { path, pos, str_val } => {
            apply_str_ins(doc, path, *pos, str_val)?;
            Ok(None)
        }
        Op::StrDel {
            path,
            pos,
            str_val,
            len,
        } => {
            let len = match str_val {
                Some(s) => s.chars().count(),
                None => len.unwrap_or(0),
            };
            apply_str_del(doc, path, *pos, len)?;
            Ok(None)
        }
        Op::Flip { path } => apply_flip(doc, path),
        Op::Inc { path, inc } => apply_inc(doc, path, *inc),
    }
}

/// Apply a sequence of operations in order.
///
/// Stops at the first failing operation. Operations before it stay
/// applied; the error carries the failing operation's index.
pub fn apply_ops(doc: &mut JsonValue, ops: &[Op]) -> Result<Vec<Option<JsonValue>>, ApplyError> {
    log::debug!("applying patch of {} operation(s)", ops.len());
    let mut results = Vec::with_capacity(ops.len());
    for (index, op) in ops.iter().enumerate() {
        log::trace!("applying operation [index = {index}] {}", op.op_name());
        match apply_op(doc, op) {
            Ok(old) => results.push(old),
            Err(error) => {
                log::debug!("operation [index = {index}] {} failed: {error}", op.op_name());
                return Err(ApplyError { index, error });
            }
        }
    }
    Ok(results)
}

/// Apply a sequence of operations with options.
///
/// With `atomic: true` the document is snapshotted first and restored if
/// any operation fails, so a failed patch leaves no trace.
pub fn apply_patch(
    doc: &mut JsonValue,
    ops: &[Op],
    options: &ApplyPatchOptions,
) -> Result<Vec<Option<JsonValue>>, ApplyError> {
    if !options.atomic {
        return apply_ops(doc, ops);
    }
    let snapshot = clone(doc);
    apply_ops(doc, ops).inspect_err(|_| {
        log::debug!("rolling back atomic patch");
        *doc = snapshot;
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────
