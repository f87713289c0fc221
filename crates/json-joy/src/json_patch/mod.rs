//! JSON Patch implementation (RFC 6902 + extensions).
//!
//! # Operations
//!
//! All standard RFC 6902 operations are supported:
//! `add`, `remove`, `replace`, `copy`, `move`, `test`.
//!
//! Extensions: `str_ins`, `str_del`, `flip`, `inc`.
//!
//! Patches are applied in place. By default a failing operation leaves the
//! operations before it applied; pass [`ApplyPatchOptions`] with `atomic`
//! set to restore the document instead.
//!
//! ```
//! use json_joy::json_patch::{DecodeOptions, ApplyPatchOptions, Patch};
//! use json_joy_util::JsonValue;
//! use serde_json::json;
//!
//! let raw = JsonValue::from(json!([{"op": "add", "path": "/b", "value": 2}]));
//! let patch = Patch::from_json(&raw, &DecodeOptions::default()).unwrap();
//! let mut doc = JsonValue::from(json!({"a": 1}));
//! patch.apply(&mut doc, &ApplyPatchOptions::default()).unwrap();
//! assert_eq!(doc, JsonValue::from(json!({"a": 1, "b": 2})));
//! ```

pub mod apply;
pub mod codec;
mod patch;
pub mod types;
pub mod validate;

pub use apply::{apply_op, apply_ops, apply_patch};
pub use codec::json::{from_json, from_json_patch, parse_operations, to_json, to_json_patch};
pub use patch::Patch;
pub use types::{
    ApplyError, ApplyPatchOptions, DecodeError, DecodeOptions, Op, OperationError, Path,
    PatchError,
};
pub use validate::{validate_operation, validate_operations, validate_patch};
