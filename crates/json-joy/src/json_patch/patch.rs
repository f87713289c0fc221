use json_joy_util::JsonValue;

use super::apply::apply_patch;
use super::codec::json::{from_json_patch, to_json_patch};
use super::types::{ApplyError, ApplyPatchOptions, DecodeError, DecodeOptions, Op};

/// A decoded patch: an ordered list of operations that can be applied to
/// any number of documents.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Patch {
    ops: Vec<Op>,
}

impl Patch {
    pub fn new(ops: Vec<Op>) -> Self {
        Self { ops }
    }

    /// Validate and decode a raw patch.
    pub fn from_json(raw: &JsonValue, options: &DecodeOptions) -> Result<Self, DecodeError> {
        from_json_patch(raw, options).map(Self::new)
    }

    pub fn to_json(&self) -> JsonValue {
        to_json_patch(&self.ops)
    }

    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Apply every operation to `doc` in order.
    pub fn apply(
        &self,
        doc: &mut JsonValue,
        options: &ApplyPatchOptions,
    ) -> Result<Vec<Option<JsonValue>>, ApplyError> {
        apply_patch(doc, &self.ops, options)
    }
}
