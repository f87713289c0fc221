//! Parent lookup for mutation.
//!
//! Removing or inserting an array element changes the length of the
//! array, so it has to go through the array itself rather than through a
//! reference to the element. `locate` walks to the container that owns the
//! addressed slot and hands back that container with the final token.

use json_joy_util::JsonValue;

use crate::get::{step, step_mut};
use crate::JsonPointerError;

/// Find the container holding the value addressed by `path`, plus the last
/// reference token.
///
/// Returns `Ok(None)` for the root path, which has no parent. The final
/// token is not checked against the container: it may name a missing key
/// or an out-of-range index.
///
/// # Errors
///
/// - `NotFound` if an intermediate key is missing or the parent is a scalar
/// - `InvalidIndex` if an intermediate array token is not an existing index
pub fn locate<'a, 'p>(
    val: &'a JsonValue,
    path: &'p [String],
) -> Result<Option<(&'a JsonValue, &'p str)>, JsonPointerError> {
    let Some((last, init)) = path.split_last() else {
        return Ok(None);
    };
    let container = init.iter().try_fold(val, |current, token| step(current, token))?;
    if !container.is_container() {
        return Err(JsonPointerError::NotFound);
    }
    Ok(Some((container, last.as_str())))
}

/// Mutable counterpart of [`locate`].
pub fn locate_mut<'a, 'p>(
    val: &'a mut JsonValue,
    path: &'p [String],
) -> Result<Option<(&'a mut JsonValue, &'p str)>, JsonPointerError> {
    let Some((last, init)) = path.split_last() else {
        return Ok(None);
    };
    let mut container = val;
    for token in init {
        container = step_mut(container, token)?;
    }
    if !container.is_container() {
        return Err(JsonPointerError::NotFound);
    }
    Ok(Some((container, last.as_str())))
}
