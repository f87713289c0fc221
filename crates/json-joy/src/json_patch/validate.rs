//! JSON Patch validator.
//!
//! Validates raw patches (as [`JsonValue`]) before anything is applied, so
//! callers can reject untrusted input early.

use json_joy_util::JsonValue;

use super::codec::json::from_json;
use super::types::{DecodeError, DecodeOptions, OperationError};

/// Check the top-level shape of a raw patch and return its operations.
///
/// The patch must be an array. Whether an empty array is accepted is
/// decided by [`DecodeOptions::allow_empty`].
pub fn validate_patch<'a>(
    patch: &'a JsonValue,
    options: &DecodeOptions,
) -> Result<&'a [JsonValue], DecodeError> {
    let ops = patch.as_array().ok_or(DecodeError::PatchInvalid)?;
    if ops.is_empty() && !options.allow_empty {
        return Err(DecodeError::PatchEmpty);
    }
    Ok(ops)
}

/// Validate a single operation descriptor.
pub fn validate_operation(op: &JsonValue) -> Result<(), OperationError> {
    from_json(op).map(|_| ())
}

/// Validate a whole raw patch, reporting the index of the first bad
/// operation.
pub fn validate_operations(patch: &JsonValue, options: &DecodeOptions) -> Result<(), DecodeError> {
    for (index, op) in validate_patch(patch, options)?.iter().enumerate() {
        validate_operation(op).map_err(|source| DecodeError::Operation { index, source })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn patch_must_be_an_array() {
        let patch: JsonValue = json!({}).into();
        assert_eq!(
            validate_patch(&patch, &DecodeOptions::default()),
            Err(DecodeError::PatchInvalid)
        );
        assert_eq!(
            validate_operations(&json!("add").into(), &DecodeOptions::default()),
            Err(DecodeError::PatchInvalid)
        );
    }

    #[test]
    fn empty_patch_is_configurable() {
        let patch: JsonValue = json!([]).into();
        assert_eq!(validate_patch(&patch, &DecodeOptions::default()).map(<[_]>::len), Ok(0));
        let strict = DecodeOptions { allow_empty: false };
        assert_eq!(validate_patch(&patch, &strict), Err(DecodeError::PatchEmpty));
    }

    #[test]
    fn reports_index_of_bad_operation() {
        let patch: JsonValue = json!([
            {"op": "add", "path": "/a", "value": 1},
            123
        ])
        .into();
        let err = validate_operations(&patch, &DecodeOptions::default()).unwrap_err();
        assert_eq!(err.index(), Some(1));
        assert_eq!(err.to_string(), "Error in operation [index = 1] (OP_INVALID).");
    }

    #[test]
    fn validate_operation_accepts_extension_ops() {
        assert!(validate_operation(&json!({"op": "flip", "path": ""}).into()).is_ok());
        assert_eq!(
            validate_operation(&json!({"op": "inc", "path": "/x"}).into()),
            Err(OperationError::InvalidInc)
        );
    }
}
