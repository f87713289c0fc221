//! Core types for the JSON Patch module: the operation catalog, the error
//! kinds raised while decoding and applying patches, and option structs.

use json_joy_json_pointer::JsonPointerError;
use json_joy_util::JsonValue;
use thiserror::Error;

pub use json_joy_json_pointer::Path;

// ── Errors ────────────────────────────────────────────────────────────────

/// Failure while applying an operation to a document.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PatchError {
    #[error("NOT_FOUND")]
    NotFound,
    #[error("INVALID_INDEX")]
    InvalidIndex,
    #[error("NOT_A_STRING")]
    NotAString,
    #[error("TEST")]
    Test,
}

impl From<JsonPointerError> for PatchError {
    fn from(e: JsonPointerError) -> Self {
        match e {
            JsonPointerError::InvalidIndex => PatchError::InvalidIndex,
            JsonPointerError::PointerInvalid
            | JsonPointerError::NotFound
            | JsonPointerError::NoParent => PatchError::NotFound,
        }
    }
}

/// The operation at `index` of a patch failed; operations before it were
/// applied.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("operation [index = {index}] failed: {error}")]
pub struct ApplyError {
    pub index: usize,
    #[source]
    pub error: PatchError,
}

/// Why a single operation descriptor was rejected.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum OperationError {
    #[error("OP_INVALID")]
    Invalid,
    #[error("OP_UNKNOWN")]
    Unknown,
    #[error("OP_PATH_MISSING")]
    MissingPath,
    #[error("OP_PATH_INVALID")]
    InvalidPath,
    #[error("OP_VALUE_MISSING")]
    MissingValue,
    #[error("OP_FROM_INVALID")]
    InvalidFrom,
    #[error("OP_POS_INVALID")]
    InvalidPos,
    #[error("OP_STR_INVALID")]
    InvalidStr,
    #[error("OP_LEN_INVALID")]
    InvalidLen,
    #[error("OP_STR_DEL_INVALID")]
    InvalidStrDel,
    #[error("OP_INC_INVALID")]
    InvalidInc,
    #[error(transparent)]
    Pointer(#[from] JsonPointerError),
}

/// Failure while turning a raw patch into typed operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    #[error("PATCH_INVALID")]
    PatchInvalid,
    #[error("PATCH_EMPTY")]
    PatchEmpty,
    #[error("Error in operation [index = {index}] ({source}).")]
    Operation {
        index: usize,
        #[source]
        source: OperationError,
    },
}

impl DecodeError {
    /// Index of the offending operation, if the failure was per-operation.
    pub fn index(&self) -> Option<usize> {
        match self {
            DecodeError::Operation { index, .. } => Some(*index),
            _ => None,
        }
    }
}

// ── Op enum ───────────────────────────────────────────────────────────────

/// A JSON Patch operation.
///
/// Each variant owns its decoded paths and payload, so one `Op` can be
/// applied to any number of documents.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    // ── RFC 6902 operations ───────────────────────────────────────────────
    Add {
        path: Path,
        value: JsonValue,
    },
    Remove {
        path: Path,
    },
    Replace {
        path: Path,
        value: JsonValue,
    },
    Copy {
        path: Path,
        from: Path,
    },
    Move {
        path: Path,
        from: Path,
    },
    Test {
        path: Path,
        value: JsonValue,
    },

    // ── Extended operations ───────────────────────────────────────────────
    StrIns {
        path: Path,
        pos: usize,
        str_val: String,
    },
    /// Exactly one of `str_val` and `len` is set; when `str_val` is given,
    /// its length is the number of characters deleted.
    StrDel {
        path: Path,
        pos: usize,
        str_val: Option<String>,
        len: Option<usize>,
    },
    Flip {
        path: Path,
    },
    Inc {
        path: Path,
        inc: f64,
    },
}

impl Op {
    /// Returns the operation name string, as written in the `op` field.
    pub fn op_name(&self) -> &'static str {
        match self {
            Op::Add { .. } => "add",
            Op::Remove { .. } => "remove",
            Op::Replace { .. } => "replace",
            Op::Copy { .. } => "copy",
            Op::Move { .. } => "move",
            Op::Test { .. } => "test",
            Op::StrIns { .. } => "str_ins",
            Op::StrDel { .. } => "str_del",
            Op::Flip { .. } => "flip",
            Op::Inc { .. } => "inc",
        }
    }

    /// Returns the path of the operation.
    pub fn path(&self) -> &Path {
        match self {
            Op::Add { path, .. }
            | Op::Remove { path }
            | Op::Replace { path, .. }
            | Op::Copy { path, .. }
            | Op::Move { path, .. }
            | Op::Test { path, .. }
            | Op::StrIns { path, .. }
            | Op::StrDel { path, .. }
            | Op::Flip { path }
            | Op::Inc { path, .. } => path,
        }
    }
}

// ── Options ───────────────────────────────────────────────────────────────

/// Options for decoding a raw patch.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
    /// If true, `[]` decodes to an empty, no-op patch.
    /// If false, it is rejected with [`DecodeError::PatchEmpty`].
    pub allow_empty: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self { allow_empty: true }
    }
}

/// Options for `apply_patch`.
#[derive(Debug, Clone, Default)]
pub struct ApplyPatchOptions {
    /// If true, the document is restored to its original state when any
    /// operation fails. If false, operations applied before the failure
    /// stay applied.
    pub atomic: bool,
}
